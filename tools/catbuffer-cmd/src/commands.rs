// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decode, round-trip and listing logic behind each subcommand.

use std::fmt::Write;

use catbuffer::{round_trip, Codec, Cursor, DecodeError, Printer, Registry};
use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum CmdError {
    #[error("unknown buffer name '{0}'")]
    UnknownName(String),

    #[error(transparent)]
    Input(#[from] InputError),

    /// Decoding stopped at `offset`. `partial` holds the half-filled value
    /// when a concrete type had already been resolved.
    #[error("failed at byte {offset}: {source}")]
    Decode {
        offset: usize,
        #[source]
        source: DecodeError,
        partial: Option<Box<dyn Codec>>,
    },

    #[error("{type_name} re-encoded differently at byte {offset}")]
    Mismatch {
        type_name: &'static str,
        offset: usize,
    },
}

impl CmdError {
    fn decode(cursor_offset: usize, source: DecodeError, partial: Option<Box<dyn Codec>>) -> Self {
        CmdError::Decode {
            offset: source.offset().unwrap_or(cursor_offset),
            source,
            partial,
        }
    }
}

/// A fully decoded payload.
#[derive(Debug)]
pub struct Decoded {
    pub codec: Box<dyn Codec>,
    pub consumed: usize,
    pub total: usize,
}

impl Decoded {
    /// Bytes left after the value.
    pub fn trailing(&self) -> usize {
        self.total - self.consumed
    }
}

fn deserialize_into(mut codec: Box<dyn Codec>, bytes: &[u8]) -> Result<Decoded, CmdError> {
    let mut cursor = Cursor::new(bytes);
    match codec.deserialize(&mut cursor) {
        Ok(()) => Ok(Decoded {
            codec,
            consumed: cursor.offset(),
            total: bytes.len(),
        }),
        Err(source) => {
            let source = DecodeError::Codec {
                type_name: codec.type_name(),
                source,
            };
            Err(CmdError::decode(cursor.offset(), source, Some(codec)))
        }
    }
}

/// Decode `bytes` as the type registered under `name`.
pub fn decode_named(registry: &Registry, name: &str, bytes: &[u8]) -> Result<Decoded, CmdError> {
    let codec = registry
        .create(name)
        .ok_or_else(|| CmdError::UnknownName(name.to_string()))?;
    deserialize_into(codec, bytes)
}

/// Detect the concrete type from the `group` header, then decode.
pub fn decode_detected(
    registry: &Registry,
    group: &str,
    bytes: &[u8],
) -> Result<Decoded, CmdError> {
    let detection = registry
        .detect(group, &Cursor::new(bytes))
        .map_err(|e| CmdError::decode(0, e.into(), None))?;
    log::info!(
        "[catbuffer-cmd] {} detected as {}",
        detection.discriminant,
        detection.codec.type_name()
    );
    deserialize_into(detection.codec, bytes)
}

/// Result of a detect, decode, encode and compare cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    pub type_name: &'static str,
    pub consumed: usize,
    pub trailing: usize,
}

pub fn round_trip_detected(
    registry: &Registry,
    group: &str,
    bytes: &[u8],
) -> Result<RoundTripReport, CmdError> {
    let mut codec = registry
        .detect(group, &Cursor::new(bytes))
        .map_err(|e| CmdError::decode(0, e.into(), None))?
        .codec;
    let type_name = codec.type_name();
    let rt = round_trip(codec.as_mut(), bytes).map_err(|source| {
        CmdError::decode(0, DecodeError::Codec { type_name, source }, None)
    })?;

    let input = &bytes[..rt.consumed];
    if let Some(offset) = rt.first_mismatch(input) {
        return Err(CmdError::Mismatch { type_name, offset });
    }
    Ok(RoundTripReport {
        type_name,
        consumed: rt.consumed,
        trailing: bytes.len() - rt.consumed,
    })
}

/// Pretty-print with the configured indent unit.
pub fn render(codec: &dyn Codec, indent: &str) -> String {
    let mut p = Printer::with_indent(indent);
    codec.print(&mut p, 0);
    p.finish()
}

/// Labelled dump of a partially decoded value, if the error carries one.
pub fn render_partial(err: &CmdError, indent: &str) -> Option<String> {
    match err {
        CmdError::Decode {
            offset,
            partial: Some(codec),
            ..
        } => Some(format!(
            "PARTIAL {} (decoding stopped at byte {})\n{}",
            codec.type_name(),
            offset,
            render(codec.as_ref(), indent)
        )),
        _ => None,
    }
}

/// Names and group tables, one entry per line.
pub fn list(registry: &Registry) -> String {
    let mut out = String::from("Types:\n");
    for name in registry.names() {
        let _ = writeln!(out, "  {}", name);
    }
    for group in registry.groups() {
        let _ = writeln!(out, "Group {}:", group.name());
        for (discriminant, name) in group.variants() {
            let _ = writeln!(out, "  {} -> {}", discriminant, name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_schema::{registry, TRANSACTION_GROUP};

    #[test]
    fn test_unknown_name() {
        let err = decode_named(registry(), "NotARealType", &[]).unwrap_err();
        assert!(matches!(err, CmdError::UnknownName(ref n) if n == "NotARealType"));
        assert!(render_partial(&err, "\t").is_none());
    }

    #[test]
    fn test_truncated_named_decode_keeps_partial() {
        let bytes = [0x10u8, 0, 0, 0, 0, 0, 0, 0, 1, 2];
        let err = decode_named(registry(), "Transaction", &bytes).unwrap_err();
        match &err {
            CmdError::Decode { offset, partial, .. } => {
                assert_eq!(*offset, 8);
                assert!(partial.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        let dump = render_partial(&err, "\t").expect("partial dump");
        assert!(dump.starts_with("PARTIAL Transaction (decoding stopped at byte 8)\n"));
        assert!(dump.contains("\tu32 size: 16 (4 bytes)\n"));
    }

    #[test]
    fn test_detect_failure_has_no_partial() {
        let err = decode_detected(registry(), TRANSACTION_GROUP, &[0u8; 12]).unwrap_err();
        match err {
            CmdError::Decode {
                offset, partial, ..
            } => {
                assert_eq!(offset, 8);
                assert!(partial.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_group() {
        let err = decode_detected(registry(), "Block", &[0u8; 4]).unwrap_err();
        assert_eq!(err.to_string(), "failed at byte 0: unknown type group 'Block'");
    }

    #[test]
    fn test_list_mentions_groups() {
        let out = list(registry());
        assert!(out.contains("  TransferTransaction\n"));
        assert!(out.contains("Group EmbeddedTransaction:\n"));
        assert!(out.contains("type=0x4154 (16724) version=1 -> TransferTransaction"));
    }
}
