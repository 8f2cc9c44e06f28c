// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod composition;
pub mod config;
pub mod errors;
pub mod report;
pub mod runner;
pub mod seq;

use crate::errors::AacompError;

pub fn run() -> Result<(), AacompError> {
    runner::run()
}
