// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Turning command-line arguments into payload bytes.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is {len} bytes, limit is {max}")]
    TooLarge { len: u64, max: usize },
}

fn check_len(len: u64, max: usize) -> Result<(), InputError> {
    if len > max as u64 {
        return Err(InputError::TooLarge { len, max });
    }
    Ok(())
}

/// Decode a hex string. Whitespace and a leading `0x` are ignored.
pub fn parse_hex(text: &str, max: usize) -> Result<Vec<u8>, InputError> {
    let compact: String = text.split_whitespace().collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    check_len(digits.len() as u64 / 2, max)?;
    Ok(hex::decode(digits)?)
}

/// Read a raw binary payload.
pub fn read_file(path: &Path, max: usize) -> Result<Vec<u8>, InputError> {
    let io_err = |source: std::io::Error| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let len = std::fs::metadata(path).map_err(io_err)?.len();
    check_len(len, max)?;
    let bytes = std::fs::read(path).map_err(io_err)?;
    log::debug!("[catbuffer-cmd] read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// `@path` reads a raw file, anything else is hex.
pub fn load_arg(arg: &str, max: usize) -> Result<Vec<u8>, InputError> {
    match arg.strip_prefix('@') {
        Some(path) => read_file(Path::new(path), max),
        None => parse_hex(arg, max),
    }
}
