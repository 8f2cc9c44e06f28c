// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod utils;
