// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types shared by the cursor, the codec contract and the dispatcher.
//!
//! Byte-level failures ([`CodecError`]) and dispatch failures
//! ([`DetectError`]) are kept apart so a caller can tell "the buffer is too
//! short" from "nothing in the schema carries this discriminant".

use thiserror::Error;

use crate::registry::Discriminant;

/// Failure while reading or writing a buffer through a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer than `requested` bytes were left at `offset`.
    #[error("truncated at byte {offset}: requested {requested} bytes, {remaining} remaining")]
    Truncated {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// `offset + requested` does not fit in `usize`.
    #[error("offset overflow at byte {offset}: requested {requested} bytes")]
    Overflow { offset: usize, requested: usize },

    /// A reserved or constant field did not hold its fixed value.
    #[error("reserved field {field} at byte {offset}: expected {expected}, found {found}")]
    ReservedMismatch {
        field: &'static str,
        offset: usize,
        expected: u64,
        found: u64,
    },

    /// A collection is too large for the width of its count prefix.
    #[error("{field}: {count} elements do not fit in a count prefix of max {max}")]
    CountOverflow {
        field: &'static str,
        count: usize,
        max: u64,
    },

    /// A size-prefixed region was not consumed exactly.
    #[error("{field}: declared {declared} bytes, consumed {consumed}")]
    SizeMismatch {
        field: &'static str,
        declared: usize,
        consumed: usize,
    },

    /// An element of a header-dispatched array could not be resolved or decoded.
    #[error("element {index} at byte {offset}: {source}")]
    Element {
        index: usize,
        offset: usize,
        #[source]
        source: Box<DetectError>,
    },
}

impl CodecError {
    pub(crate) fn truncated(offset: usize, requested: usize, remaining: usize) -> Self {
        CodecError::Truncated {
            offset,
            requested,
            remaining,
        }
    }

    /// Byte offset the failure was detected at, when the variant carries one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            CodecError::Truncated { offset, .. }
            | CodecError::Overflow { offset, .. }
            | CodecError::ReservedMismatch { offset, .. }
            | CodecError::Element { offset, .. } => Some(*offset),
            CodecError::CountOverflow { .. } | CodecError::SizeMismatch { .. } => None,
        }
    }

    /// Shift the carried offsets by `base`, for errors raised inside a sub-cursor.
    pub(crate) fn rebase(mut self, base: usize) -> Self {
        self.shift(base);
        self
    }

    fn shift(&mut self, base: usize) {
        match self {
            CodecError::Truncated { offset, .. }
            | CodecError::Overflow { offset, .. }
            | CodecError::ReservedMismatch { offset, .. } => *offset = offset.saturating_add(base),
            CodecError::Element { offset, source, .. } => {
                *offset = offset.saturating_add(base);
                source.shift(base);
            }
            CodecError::CountOverflow { .. } | CodecError::SizeMismatch { .. } => {}
        }
    }

    /// True for the bounds family (truncation and offset overflow).
    pub fn is_bounds(&self) -> bool {
        matches!(
            self,
            CodecError::Truncated { .. } | CodecError::Overflow { .. }
        )
    }
}

pub type CodecResult<T> = core::result::Result<T, CodecError>;

/// Failure while resolving a concrete codec from a buffer header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// No group with this name is registered.
    #[error("unknown type group '{0}'")]
    UnknownGroup(String),

    /// The shared header could not be decoded; lookup was never attempted.
    #[error("cannot decode {group} header: {source}")]
    Header {
        group: &'static str,
        #[source]
        source: CodecError,
    },

    /// The header decoded but no variant carries its discriminant.
    #[error("{group}: no codec for {discriminant}")]
    Unresolved {
        group: &'static str,
        discriminant: Discriminant,
    },
}

impl DetectError {
    /// Shift the header decode offset by `base`, for probes run on a sub-cursor.
    pub(crate) fn rebase(mut self, base: usize) -> Self {
        self.shift(base);
        self
    }

    fn shift(&mut self, base: usize) {
        if let DetectError::Header { source, .. } = self {
            source.shift(base);
        }
    }
}

/// Failure of a detect-then-deserialize call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Detect(#[from] DetectError),

    /// Detection succeeded but the concrete codec rejected the body.
    #[error("{type_name}: {source}")]
    Codec {
        type_name: &'static str,
        #[source]
        source: CodecError,
    },
}

impl DecodeError {
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::Detect(DetectError::Header { source, .. }) => source.offset(),
            DecodeError::Detect(_) => None,
            DecodeError::Codec { source, .. } => source.offset(),
        }
    }
}

/// Failure while assembling a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("type name '{0}' registered twice")]
    DuplicateName(String),

    #[error("type group '{0}' registered twice")]
    DuplicateGroup(String),

    #[error("{group}: {discriminant} used by both {first} and {second}")]
    DuplicateDiscriminant {
        group: &'static str,
        discriminant: Discriminant,
        first: &'static str,
        second: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_display_variants() {
        let err = CodecError::truncated(4, 7, 6);
        assert_eq!(
            err.to_string(),
            "truncated at byte 4: requested 7 bytes, 6 remaining"
        );

        let err = CodecError::ReservedMismatch {
            field: "entity_body_reserved_1",
            offset: 104,
            expected: 0,
            found: 9,
        };
        assert_eq!(
            err.to_string(),
            "reserved field entity_body_reserved_1 at byte 104: expected 0, found 9"
        );

        let err = CodecError::CountOverflow {
            field: "mosaics",
            count: 300,
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "mosaics: 300 elements do not fit in a count prefix of max 255"
        );
    }

    #[test]
    fn test_codec_error_offset() {
        assert_eq!(CodecError::truncated(12, 1, 0).offset(), Some(12));
        assert_eq!(
            CodecError::Overflow {
                offset: 3,
                requested: usize::MAX
            }
            .offset(),
            Some(3)
        );
        assert_eq!(
            CodecError::SizeMismatch {
                field: "transactions",
                declared: 8,
                consumed: 16
            }
            .offset(),
            None
        );
        assert!(CodecError::truncated(0, 1, 0).is_bounds());
    }

    #[test]
    fn test_rebase_reaches_nested_header_offset() {
        let nested = CodecError::Element {
            index: 1,
            offset: 16,
            source: Box::new(DetectError::Header {
                group: "EmbeddedTransaction",
                source: CodecError::truncated(24, 32, 4),
            }),
        };
        let err = nested.rebase(168);
        assert_eq!(err.offset(), Some(184));
        match err {
            CodecError::Element { source, .. } => match *source {
                DetectError::Header { source, .. } => assert_eq!(source.offset(), Some(192)),
                other => panic!("unexpected source: {other:?}"),
            },
            other => panic!("unexpected error: {other:?}"),
        }

        let unresolved = DetectError::UnknownGroup("Block".into()).rebase(8);
        assert_eq!(unresolved, DetectError::UnknownGroup("Block".into()));
    }

    #[test]
    fn test_decode_error_offset_from_header() {
        let err: DecodeError = DetectError::Header {
            group: "Transaction",
            source: CodecError::truncated(8, 64, 2),
        }
        .into();
        assert_eq!(err.offset(), Some(8));

        let err: DecodeError = DetectError::UnknownGroup("Block".into()).into();
        assert_eq!(err.offset(), None);
        assert_eq!(err.to_string(), "unknown type group 'Block'");
    }
}
