// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use aacomp::seq::record::SeqRecord;

// Renders records back to FastA text, wrapping sequences at `width` columns.
pub fn to_fasta(records: &[SeqRecord], width: usize) -> String {
    let mut out = String::new();
    for rec in records {
        out.push('>');
        out.push_str(&rec.header);
        out.push('\n');
        let chars: Vec<char> = rec.sequence.chars().collect();
        for chunk in chars.chunks(width) {
            out.extend(chunk);
            out.push('\n');
        }
    }
    out
}

// A scratch directory with no .aacompconfig, used as $HOME so that the user's own config cannot
// leak into the tests.
pub fn clean_home(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::create_dir_all(&dir).expect("creating scratch home");
    dir
}

pub fn run_aacomp(home: &PathBuf, args: &[&str]) -> Output {
    run_aacomp_in(home, &PathBuf::from(env!("CARGO_MANIFEST_DIR")), args)
}

// Same as run_aacomp(), but from working directory `cwd`.
pub fn run_aacomp_in(home: &PathBuf, cwd: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aacomp"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("running aacomp")
}
