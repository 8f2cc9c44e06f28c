// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::errors::AacompError;

pub const CONFIG_FILENAME: &str = ".aacompconfig";

// Optional JSON dotfile, e.g.
//
//   { "strip_gaps": true, "sequence_id": "sp|P69905|HBA_HUMAN" }
//
// Unknown keys are ignored, as are keys of the wrong type.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AacompConfig {
    pub strip_gaps: bool,
    pub sequence_id: Option<String>,
}

impl AacompConfig {
    pub fn from_value(value: &Value) -> Self {
        AacompConfig {
            strip_gaps: value
                .get("strip_gaps")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            sequence_id: value
                .get("sequence_id")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AacompError> {
        let text = fs::read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| AacompError::Config(e.to_string()))?;
        Ok(Self::from_value(&value))
    }
}

fn config_in(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILENAME);
    path.exists().then_some(path)
}

// $HOME first, then the current directory.
pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if let Some(path) = config_in(Path::new(&home)) {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        return config_in(&cwd);
    }
    None
}
