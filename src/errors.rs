// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AacompError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Parse(String),

    // Zero residues left once gaps are removed: there is nothing to divide by.
    #[error("Sequence has no residues once gaps are removed")]
    EmptySequence,

    #[error("No sequence with ID '{0}'")]
    UnknownId(String),

    #[error("Config error: {0}")]
    Config(String),
}
