// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec contract implemented by every schema-generated message type.

use std::fmt::Debug;

use crate::cursor::{Cursor, CursorMut};
use crate::error::{CodecError, CodecResult};
use crate::print::Printer;

/// Human-readable dump of a decoded value.
pub trait Print {
    /// Render fields at nesting depth `level`. `level` only drives indentation.
    fn print(&self, p: &mut Printer, level: usize);
}

/// Serialize/deserialize/size contract for one wire layout.
///
/// Implementations must agree on byte widths: after a successful
/// [`deserialize`](Codec::deserialize), [`size`](Codec::size) equals the bytes
/// the cursor advanced, and [`serialize`](Codec::serialize) writes exactly that
/// many bytes.
pub trait Codec: Print + Debug + Send + Sync {
    /// Schema name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Populate `self` from `cursor`.
    ///
    /// On error the fields are in an unspecified state and the value must be
    /// discarded.
    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()>;

    /// Write the current field values in the layout `deserialize` consumes.
    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()>;

    /// Exact serialized width of the current field values.
    fn size(&self) -> usize;

    /// Serialize into a buffer sized from [`size`](Codec::size).
    fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        let mut out = vec![0u8; self.size()];
        let mut cursor = CursorMut::new(&mut out);
        self.serialize(&mut cursor)?;
        let written = cursor.offset();
        if written != out.len() {
            return Err(CodecError::SizeMismatch {
                field: self.type_name(),
                declared: out.len(),
                consumed: written,
            });
        }
        Ok(out)
    }

    /// Pretty-printed dump with tab indentation.
    fn pretty(&self) -> String {
        let mut p = Printer::new();
        self.print(&mut p, 0);
        p.finish()
    }
}

/// Decode a `T` that must span all of `bytes`.
pub fn decode_exact<T: Codec + Default>(bytes: &[u8]) -> CodecResult<T> {
    let mut value = T::default();
    let mut cursor = Cursor::new(bytes);
    value.deserialize(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(CodecError::SizeMismatch {
            field: value.type_name(),
            declared: bytes.len(),
            consumed: cursor.offset(),
        });
    }
    Ok(value)
}

/// Outcome of one decode-then-encode cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    /// Bytes the cursor advanced during `deserialize`.
    pub consumed: usize,
    /// What `size()` reported afterwards.
    pub size: usize,
    /// Re-encoded bytes.
    pub output: Vec<u8>,
}

impl RoundTrip {
    /// First byte index where `input` and the re-encoding disagree.
    pub fn first_mismatch(&self, input: &[u8]) -> Option<usize> {
        let common = input.len().min(self.output.len());
        (0..common)
            .find(|&i| input[i] != self.output[i])
            .or((input.len() != self.output.len()).then_some(common))
    }

    pub fn is_identity(&self, input: &[u8]) -> bool {
        self.consumed == self.size && self.first_mismatch(input).is_none()
    }
}

/// Deserialize `input` into `codec`, then serialize into a buffer of `size()` bytes.
pub fn round_trip(codec: &mut dyn Codec, input: &[u8]) -> CodecResult<RoundTrip> {
    let mut cursor = Cursor::new(input);
    codec.deserialize(&mut cursor)?;
    let consumed = cursor.offset();
    let size = codec.size();
    let output = codec.to_bytes()?;
    log::trace!(
        "[catbuffer] round trip {}: consumed={} size={} written={}",
        codec.type_name(),
        consumed,
        size,
        output.len()
    );
    Ok(RoundTrip {
        consumed,
        size,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-field record used to exercise the provided methods.
    #[derive(Debug, Default)]
    struct Pair {
        a: u16,
        b: u32,
    }

    impl Print for Pair {
        fn print(&self, p: &mut Printer, level: usize) {
            p.begin(level, "Pair", self.size());
            p.scalar(level, "u16", "a", self.a, 2);
            p.scalar(level, "u32", "b", self.b, 4);
            p.end(level);
        }
    }

    impl Codec for Pair {
        fn type_name(&self) -> &'static str {
            "Pair"
        }

        fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
            self.a = cursor.read_u16_le()?;
            self.b = cursor.read_u32_le()?;
            Ok(())
        }

        fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
            cursor.write_u16_le(self.a)?;
            cursor.write_u32_le(self.b)
        }

        fn size(&self) -> usize {
            6
        }
    }

    #[test]
    fn test_to_bytes_uses_size() {
        let pair = Pair { a: 1, b: 2 };
        assert_eq!(pair.to_bytes().expect("encode"), vec![1, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn test_decode_exact_rejects_trailing_bytes() {
        let pair: Pair = decode_exact(&[1, 0, 2, 0, 0, 0]).expect("exact decode");
        assert_eq!((pair.a, pair.b), (1, 2));

        let err = decode_exact::<Pair>(&[1, 0, 2, 0, 0, 0, 9]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::SizeMismatch {
                declared: 7,
                consumed: 6,
                ..
            }
        ));
    }

    #[test]
    fn test_round_trip_reports_identity() {
        let input = [5u8, 0, 7, 0, 0, 0];
        let mut pair = Pair::default();
        let rt = round_trip(&mut pair, &input).expect("round trip");
        assert_eq!(rt.consumed, 6);
        assert_eq!(rt.size, 6);
        assert!(rt.is_identity(&input));
    }

    #[test]
    fn test_round_trip_truncated_input() {
        let mut pair = Pair::default();
        let err = round_trip(&mut pair, &[5u8, 0, 7]).unwrap_err();
        assert_eq!(err.offset(), Some(2));
    }

    #[test]
    fn test_first_mismatch() {
        let rt = RoundTrip {
            consumed: 3,
            size: 3,
            output: vec![1, 2, 3],
        };
        assert_eq!(rt.first_mismatch(&[1, 2, 3]), None);
        assert_eq!(rt.first_mismatch(&[1, 9, 3]), Some(1));
        assert_eq!(rt.first_mismatch(&[1, 2, 3, 4]), Some(3));
    }

    #[test]
    fn test_pretty_prints_fields() {
        let out = Pair { a: 3, b: 4 }.pretty();
        assert!(out.starts_with("Pair (6 bytes)\n{\n"));
        assert!(out.contains("\tu16 a: 3 (2 bytes)\n"));
    }
}
