// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! catbuffer-cmd - Decode and pretty-print catbuffer payloads.
//!
//! Usage:
//!   catbuffer-cmd hex TransferTransaction D2000000...
//!   catbuffer-cmd hex-auto Transaction D2000000...
//!   catbuffer-cmd raw-auto Transaction payload.bin
//!   catbuffer-cmd roundtrip Transaction @payload.bin
//!   catbuffer-cmd list

use std::path::PathBuf;

use anyhow::Context;
use catbuffer_cmd::{
    decode_detected, decode_named, list, load_arg, parse_hex, read_file, render, render_partial,
    round_trip_detected, CmdConfig, CmdError, Decoded,
};
use catbuffer_schema::registry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catbuffer-cmd")]
#[command(about = "Decode, pretty-print and round-trip catbuffer payloads")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print the partially decoded value when decoding fails
    #[arg(long, global = true)]
    print_partial: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deserialize a hex string as the named type
    Hex { name: String, hex: String },

    /// Deserialize a hex string, detecting its type from the group header
    HexAuto { group: String, hex: String },

    /// Deserialize a raw file as the named type
    Raw { name: String, file: PathBuf },

    /// Deserialize a raw file, detecting its type from the group header
    RawAuto { group: String, file: PathBuf },

    /// Detect, deserialize, serialize and compare against the input
    Roundtrip {
        group: String,
        /// Hex string, or @path for a raw file
        input: String,
    },

    /// List registered type names and group tables
    List,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CmdConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CmdConfig::default(),
    };
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    if args.print_partial {
        config.print_partial = true;
    }
    config.validate()?;

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .format_timestamp_millis()
    .try_init();

    run(&args.command, &config)
}

fn run(command: &Command, config: &CmdConfig) -> anyhow::Result<()> {
    let max = config.max_input_bytes;
    let registry = registry();

    match command {
        Command::Hex { name, hex } => {
            let bytes = parse_hex(hex, max)?;
            report(decode_named(registry, name, &bytes), config)
        }
        Command::HexAuto { group, hex } => {
            let bytes = parse_hex(hex, max)?;
            report(decode_detected(registry, group, &bytes), config)
        }
        Command::Raw { name, file } => {
            let bytes = read_file(file, max)?;
            report(decode_named(registry, name, &bytes), config)
        }
        Command::RawAuto { group, file } => {
            let bytes = read_file(file, max)?;
            report(decode_detected(registry, group, &bytes), config)
        }
        Command::Roundtrip { group, input } => {
            let bytes = load_arg(input, max)?;
            let rt = round_trip_detected(registry, group, &bytes)?;
            println!(
                "{}: {} bytes re-encoded identically",
                rt.type_name, rt.consumed
            );
            if rt.trailing > 0 {
                log::warn!("{} trailing bytes ignored", rt.trailing);
            }
            Ok(())
        }
        Command::List => {
            print!("{}", list(registry));
            Ok(())
        }
    }
}

/// Print only after a successful decode; partial output is opt-in and labelled.
fn report(result: Result<Decoded, CmdError>, config: &CmdConfig) -> anyhow::Result<()> {
    match result {
        Ok(decoded) => {
            print!("{}", render(decoded.codec.as_ref(), &config.indent));
            if decoded.trailing() > 0 {
                log::warn!(
                    "{} trailing bytes after {}",
                    decoded.trailing(),
                    decoded.codec.type_name()
                );
            }
            println!("\nData deserialized successfully!");
            Ok(())
        }
        Err(err) => {
            if config.print_partial {
                if let Some(dump) = render_partial(&err, &config.indent) {
                    print!("{}", dump);
                }
            }
            Err(err.into())
        }
    }
}
