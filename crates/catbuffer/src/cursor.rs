// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read/write cursors over fixed-length byte buffers.
//!
//! Every field a generated codec touches goes through [`Cursor::read_and_advance`]
//! or [`CursorMut::write_and_advance`], so the overflow and bounds checks live
//! in exactly one place ([`checked_end`]).
//!
//! ```text
//!                   total_len
//!          ____________|_____________
//!         |                          |
//! buffer: [0|1|2|3|4|5|6|7| ........ ]
//!          ^            ^
//!        start        offset
//! ```
//!
//! A [`Cursor`] is `Copy`: duplicating it is how a header is peeked without
//! disturbing the original. A [`CursorMut`] is the only writer of its buffer and
//! cannot be duplicated.

use crate::error::{CodecError, CodecResult};

/// End offset of an `n`-byte access at `offset`, or the reason it is refused.
///
/// `n` comes from schema fields and count prefixes, so both the addition and
/// the bound are checked.
#[inline]
fn checked_end(offset: usize, len: usize, n: usize) -> CodecResult<usize> {
    let end = offset.checked_add(n).ok_or(CodecError::Overflow {
        offset,
        requested: n,
    })?;
    if end > len {
        return Err(CodecError::truncated(offset, n, len - offset));
    }
    Ok(end)
}

/// Bytes needed after `offset` to reach the next multiple of `alignment`.
#[inline]
pub const fn padding_for(offset: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return 0;
    }
    (alignment - offset % alignment) % alignment
}

/// Generate little-endian read methods on top of `read_array`.
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> CodecResult<$type> {
            Ok(<$type>::from_le_bytes(self.read_array::<$size>()?))
        }
    };
}

/// Generate little-endian write methods on top of `write_bytes`.
macro_rules! impl_write_le {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) -> CodecResult<()> {
            self.write_bytes(&value.to_le_bytes())
        }
    };
}

/// Accessors and offset movement shared by both cursors.
macro_rules! impl_cursor_common {
    () => {
        /// Current offset from the start of the buffer.
        pub fn offset(&self) -> usize {
            self.offset
        }

        /// Length fixed at construction.
        pub fn total_len(&self) -> usize {
            self.buffer.len()
        }

        pub fn remaining(&self) -> usize {
            self.buffer.len() - self.offset
        }

        pub fn is_empty(&self) -> bool {
            self.offset == self.buffer.len()
        }

        /// True iff at least `n` bytes remain. Never mutates.
        pub fn can_read(&self, n: usize) -> bool {
            n <= self.remaining()
        }

        /// Move forward by `n` bytes, or fail and leave the offset untouched.
        pub fn advance(&mut self, n: usize) -> CodecResult<()> {
            self.offset = checked_end(self.offset, self.buffer.len(), n)?;
            Ok(())
        }
    };
}

/// Read cursor borrowing an immutable byte region.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_cursor_common!();

    /// View of the unread bytes. Bound to the backing slice, not to `self`.
    pub fn current(&self) -> &'a [u8] {
        &self.buffer[self.offset..]
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> &'a [u8] {
        &self.buffer[..self.offset]
    }

    /// Yield the next `n` bytes and step over them, all or nothing.
    pub fn read_and_advance(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        let start = self.offset;
        let end = checked_end(start, self.buffer.len(), n)?;
        self.offset = end;
        Ok(&self.buffer[start..end])
    }

    pub fn read_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_and_advance(N)?);
        Ok(out)
    }

    /// Split off the next `n` bytes as an independent cursor and step over them.
    ///
    /// Offsets inside the returned cursor start at zero.
    pub fn split_to(&mut self, n: usize) -> CodecResult<Cursor<'a>> {
        Ok(Cursor::new(self.read_and_advance(n)?))
    }

    /// Step over the padding that aligns the offset to `alignment`.
    pub fn skip_padding(&mut self, alignment: usize) -> CodecResult<()> {
        self.advance(padding_for(self.offset, alignment))
    }

    /// Read the padding that aligns the offset to `alignment`; every byte must be zero.
    ///
    /// On failure the offset is left where it was.
    pub fn expect_padding(&mut self, alignment: usize) -> CodecResult<()> {
        let start = self.offset;
        let padding = self.read_and_advance(padding_for(start, alignment))?;
        if let Some(i) = padding.iter().position(|&b| b != 0) {
            self.offset = start;
            return Err(CodecError::ReservedMismatch {
                field: "padding",
                offset: start + i,
                expected: 0,
                found: u64::from(padding[i]),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> CodecResult<i8> {
        Ok(i8::from_le_bytes(self.read_array::<1>()?))
    }

    impl_read_le!(read_u16_le, u16, 2);
    impl_read_le!(read_u32_le, u32, 4);
    impl_read_le!(read_u64_le, u64, 8);
    impl_read_le!(read_i16_le, i16, 2);
    impl_read_le!(read_i32_le, i32, 4);
    impl_read_le!(read_i64_le, i64, 8);
}

/// Write cursor holding the only mutable borrow of its byte region.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    impl_cursor_common!();

    /// Alias of [`can_read`](Self::can_read) for the write direction.
    pub fn can_write(&self, n: usize) -> bool {
        self.can_read(n)
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.offset]
    }

    /// Mutable view of the unwritten bytes, valid until the next call on `self`.
    pub fn current_mut(&mut self) -> &mut [u8] {
        &mut self.buffer[self.offset..]
    }

    /// Reserve the next `n` bytes for the caller and step over them, all or nothing.
    pub fn write_and_advance(&mut self, n: usize) -> CodecResult<&mut [u8]> {
        let start = self.offset;
        let end = checked_end(start, self.buffer.len(), n)?;
        self.offset = end;
        Ok(&mut self.buffer[start..end])
    }

    pub fn write_bytes(&mut self, data: &[u8]) -> CodecResult<()> {
        self.write_and_advance(data.len())?.copy_from_slice(data);
        Ok(())
    }

    /// Write zero bytes until the offset is a multiple of `alignment`.
    pub fn write_padding(&mut self, alignment: usize) -> CodecResult<()> {
        let padding = padding_for(self.offset, alignment);
        self.write_and_advance(padding)?.fill(0);
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> CodecResult<()> {
        self.write_bytes(&[value])
    }

    impl_write_le!(write_i8, i8);
    impl_write_le!(write_u16_le, u16);
    impl_write_le!(write_u32_le, u32);
    impl_write_le!(write_u64_le, u64);
    impl_write_le!(write_i16_le, i16);
    impl_write_le!(write_i32_le, i32);
    impl_write_le!(write_i64_le, i64);
}
