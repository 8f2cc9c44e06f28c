// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use crate::config::{find_config, AacompConfig};
use crate::errors::AacompError;
use crate::report::format_report;
use crate::seq::fasta::read_fasta_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Input FastA file
    #[arg(short, long)]
    file: PathBuf,

    /// Delete gaps ('-') from sequences
    #[arg(short = 'g', long = "delgaps")]
    delgaps: bool,
}

// A broken config file is reported but does not stop the run.
fn load_config() -> AacompConfig {
    let Some(path) = find_config() else {
        return AacompConfig::default();
    };
    match AacompConfig::from_file(&path) {
        Ok(cfg) => {
            info!("Using config {}", path.display());
            cfg
        }
        Err(e) => {
            warn!("Error reading {}: {}", path.display(), e);
            AacompConfig::default()
        }
    }
}

pub fn build_report(
    path: &Path,
    del_gaps: bool,
    config: &AacompConfig,
) -> Result<String, AacompError> {
    let collection = read_fasta_file(path, del_gaps || config.strip_gaps)?;
    let id = match &config.sequence_id {
        Some(id) => id.as_str(),
        // parse() already rejects input without records, so this never fails.
        None => collection
            .first()
            .map(|rec| rec.header.as_str())
            .ok_or_else(|| AacompError::Parse(String::from("No sequences found")))?,
    };
    format_report(&collection, id)
}

pub fn run() -> Result<(), AacompError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config();
    let report = build_report(&cli.file, cli.delgaps, &config)?;
    print!("{}", report);
    Ok(())
}
