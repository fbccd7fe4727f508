// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Library half of `catbuffer-cmd`: configuration, input parsing and the
//! subcommand logic, kept out of `main.rs` so it can be tested directly.

pub mod commands;
pub mod config;
pub mod input;

pub use commands::{
    decode_detected, decode_named, list, render, render_partial, round_trip_detected, CmdError,
    Decoded, RoundTripReport,
};
pub use config::{CmdConfig, ConfigError};
pub use input::{load_arg, parse_hex, read_file, InputError};
