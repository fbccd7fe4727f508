// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Indentation-scoped pretty printer shared by every codec's `print`.
//!
//! Output shape, one indent unit per nesting level:
//!
//! ```text
//! TransferTransaction (185 bytes)
//! {
//!     u32 size: 185 (4 bytes)
//!     u8[ 32 ] signer_public_key = 9f3a... (32 bytes)
//!     UnresolvedMosaic mosaics[ 1 ] =
//!     [
//!         UnresolvedMosaic (16 bytes)
//!         {
//!     ...
//! }
//! ```
//!
//! Writes go to a `String`, so printing cannot fail.

use std::fmt::{Display, Write};

/// How a byte array is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintHint {
    /// Contiguous lowercase hex.
    #[default]
    Hex,
    /// Printable ASCII, other bytes as `.`.
    Ascii,
    /// Decimal values separated by `|`.
    Num,
}

/// Accumulates a nested, indented dump.
#[derive(Debug, Clone)]
pub struct Printer {
    out: String,
    indent: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    /// Printer indenting with one tab per level.
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self {
            out: String::new(),
            indent: indent.into(),
        }
    }

    fn pad(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(&self.indent);
        }
    }

    /// Emit one raw line at `level`.
    pub fn line(&mut self, level: usize, text: impl Display) {
        self.pad(level);
        let _ = writeln!(self.out, "{}", text);
    }

    /// Open a structure: `Name (N bytes)` then `{`.
    pub fn begin(&mut self, level: usize, name: &str, size: usize) {
        self.line(level, format_args!("{} ({} bytes)", name, size));
        self.line(level, "{");
    }

    pub fn end(&mut self, level: usize) {
        self.line(level, "}");
    }

    /// `ty name: value (width bytes)` one level below `level`.
    pub fn scalar(
        &mut self,
        level: usize,
        ty: &str,
        name: &str,
        value: impl Display,
        width: usize,
    ) {
        self.line(
            level + 1,
            format_args!("{} {}: {} ({} bytes)", ty, name, value, width),
        );
    }

    /// Fixed or variable byte array rendered per `hint`.
    pub fn bytes(&mut self, level: usize, name: &str, data: &[u8], hint: PrintHint) {
        let mut rendered = String::with_capacity(data.len() * 2);
        match hint {
            PrintHint::Hex => {
                for b in data {
                    let _ = write!(rendered, "{:02x}", b);
                }
            }
            PrintHint::Ascii => {
                rendered.extend(data.iter().map(|&b| {
                    if b.is_ascii_graphic() || b == b' ' {
                        b as char
                    } else {
                        '.'
                    }
                }));
            }
            PrintHint::Num => {
                for b in data {
                    let _ = write!(rendered, "{}|", b);
                }
            }
        }
        self.line(
            level + 1,
            format_args!("u8[ {} ] {} = {} ({} bytes)", data.len(), name, rendered, data.len()),
        );
    }

    /// Open an array of `count` elements: `ty name[ count ] =` then `[`.
    pub fn list_begin(&mut self, level: usize, ty: &str, name: &str, count: usize) {
        self.line(level + 1, format_args!("{} {}[ {} ] =", ty, name, count));
        self.line(level + 1, "[");
    }

    /// Close an array, reporting its total byte width.
    pub fn list_end(&mut self, level: usize, size: usize) {
        self.line(level + 1, format_args!("] ({} bytes)", size));
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_indentation() {
        let mut p = Printer::with_indent("  ");
        p.begin(0, "Outer", 12);
        p.scalar(0, "u32", "size", 12, 4);
        p.begin(1, "Inner", 8);
        p.scalar(1, "u64", "amount", 5, 8);
        p.end(1);
        p.end(0);

        let expected = "Outer (12 bytes)\n{\n  u32 size: 12 (4 bytes)\n  Inner (8 bytes)\n  {\n    u64 amount: 5 (8 bytes)\n  }\n}\n";
        assert_eq!(p.finish(), expected);
    }

    #[test]
    fn test_bytes_hints() {
        let mut p = Printer::new();
        p.bytes(0, "key", &[0x0a, 0xff], PrintHint::Hex);
        p.bytes(0, "msg", b"hi\x01", PrintHint::Ascii);
        p.bytes(0, "raw", &[1, 20], PrintHint::Num);
        let out = p.finish();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "\tu8[ 2 ] key = 0aff (2 bytes)");
        assert_eq!(lines[1], "\tu8[ 3 ] msg = hi. (3 bytes)");
        assert_eq!(lines[2], "\tu8[ 2 ] raw = 1|20| (2 bytes)");
    }

    #[test]
    fn test_list_markers() {
        let mut p = Printer::new();
        p.list_begin(0, "Cosignature", "cosignatures", 0);
        p.list_end(0, 0);
        assert_eq!(
            p.as_str(),
            "\tCosignature cosignatures[ 0 ] =\n\t[\n\t] (0 bytes)\n"
        );
    }
}
