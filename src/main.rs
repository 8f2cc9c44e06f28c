// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

fn main() -> ExitCode {
    match aacomp::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aacomp: {}", e);
            ExitCode::FAILURE
        }
    }
}
