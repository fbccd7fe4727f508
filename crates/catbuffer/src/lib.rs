// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # catbuffer - runtime for schema-generated binary codecs
//!
//! Generated message types implement [`Codec`] on top of a bounds-checked
//! [`Cursor`]; a [`Registry`] maps type names and `(code, version)` header
//! discriminants to fresh instances so a buffer can be decoded without
//! knowing its concrete type in advance.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catbuffer::{Cursor, Registry};
//!
//! fn dump(registry: &Registry, bytes: &[u8]) {
//!     let mut cursor = Cursor::new(bytes);
//!     match registry.decode("Transaction", &mut cursor) {
//!         Ok(codec) => print!("{}", codec.pretty()),
//!         Err(err) => eprintln!("failed at byte {}: {}", cursor.offset(), err),
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------------+
//! |  Registry: names -> Factory, groups -> (probe, variants)  |
//! +-----------------------------------------------------------+
//! |  Codec: deserialize | serialize | size | print            |
//! |  field: reserved, counts, fill and sized arrays           |
//! +-----------------------------------------------------------+
//! |  Cursor / CursorMut: checked offset over a fixed buffer   |
//! +-----------------------------------------------------------+
//! ```
//!
//! ## Modules Overview
//!
//! - [`cursor`] - read/write cursors and little-endian primitives
//! - [`codec`] - the contract every generated type implements
//! - [`field`] - helpers generated code calls per field form
//! - [`registry`] - lookup by name and header auto-detection
//! - [`print`] - indented pretty printer
//! - [`error`] - error enums for each layer

#![forbid(unsafe_code)]

pub mod codec;
pub mod cursor;
pub mod error;
pub mod field;
pub mod print;
pub mod registry;

pub use codec::{decode_exact, round_trip, Codec, Print, RoundTrip};
pub use cursor::{padding_for, Cursor, CursorMut};
pub use error::{CodecError, CodecResult, DecodeError, DetectError, RegistryError};
pub use field::Scalar;
pub use print::{PrintHint, Printer};
pub use registry::{
    factory, Detection, Discriminant, Factory, Group, GroupBuilder, HeaderProbe, Registry,
    RegistryBuilder,
};
