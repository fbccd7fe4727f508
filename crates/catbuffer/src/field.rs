// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field-level building blocks for generated codecs.
//!
//! Schema output calls these instead of open-coding each field form:
//!
//! | Schema form      | Decode                     | Encode                      | Size                    |
//! |------------------|----------------------------|-----------------------------|-------------------------|
//! | scalar / bytes   | [`Scalar::read`]           | [`Scalar::write`]           | [`Scalar::WIDTH`]       |
//! | reserved         | [`expect_reserved`]        | [`Scalar::write`]           | [`Scalar::WIDTH`]       |
//! | count / size     | [`Scalar::read`]           | [`count_as`]                | [`Scalar::WIDTH`]       |
//! | counted array    | [`read_counted`]           | [`write_all`]               | [`total_size`]          |
//! | array fill       | [`read_fill`]              | [`write_all`]               | [`total_size`]          |
//! | array sized      | [`read_sized_polymorphic`] | [`write_sized_polymorphic`] | [`sized_polymorphic_len`] |

use crate::codec::Codec;
use crate::cursor::{padding_for, Cursor, CursorMut};
use crate::error::{CodecError, CodecResult};
use crate::registry::Group;

/// Fixed-width little-endian value.
pub trait Scalar: Sized + Copy {
    const WIDTH: usize;

    fn read(cursor: &mut Cursor<'_>) -> CodecResult<Self>;

    fn write(self, cursor: &mut CursorMut<'_>) -> CodecResult<()>;
}

macro_rules! impl_scalar {
    ($($type:ty),* $(,)?) => {
        $(
            impl Scalar for $type {
                const WIDTH: usize = core::mem::size_of::<$type>();

                fn read(cursor: &mut Cursor<'_>) -> CodecResult<Self> {
                    Ok(<$type>::from_le_bytes(cursor.read_array()?))
                }

                fn write(self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
                    cursor.write_bytes(&self.to_le_bytes())
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<const N: usize> Scalar for [u8; N] {
    const WIDTH: usize = N;

    fn read(cursor: &mut Cursor<'_>) -> CodecResult<Self> {
        cursor.read_array()
    }

    fn write(self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        cursor.write_bytes(&self)
    }
}

/// Read a reserved field and reject anything but `expected`.
pub fn expect_reserved<T>(
    cursor: &mut Cursor<'_>,
    field: &'static str,
    expected: T,
) -> CodecResult<T>
where
    T: Scalar + PartialEq + Into<u64>,
{
    let offset = cursor.offset();
    let found = T::read(cursor)?;
    if found != expected {
        return Err(CodecError::ReservedMismatch {
            field,
            offset,
            expected: expected.into(),
            found: found.into(),
        });
    }
    Ok(found)
}

/// Narrow a collection length or byte size to the width of its prefix field.
pub fn count_as<T>(field: &'static str, count: usize) -> CodecResult<T>
where
    T: Scalar + TryFrom<usize>,
{
    T::try_from(count).map_err(|_| CodecError::CountOverflow {
        field,
        count,
        max: prefix_max(T::WIDTH),
    })
}

const fn prefix_max(width: usize) -> u64 {
    if width >= 8 {
        u64::MAX
    } else {
        (1u64 << (8 * width)) - 1
    }
}

/// Decode exactly `count` elements.
pub fn read_counted<T: Codec + Default>(
    cursor: &mut Cursor<'_>,
    count: usize,
) -> CodecResult<Vec<T>> {
    // count comes off the wire; cap the preallocation by what could fit
    let mut items = Vec::with_capacity(count.min(cursor.remaining()));
    for _ in 0..count {
        let mut item = T::default();
        item.deserialize(cursor)?;
        items.push(item);
    }
    Ok(items)
}

/// Decode elements until `cursor` is exhausted.
pub fn read_fill<T: Codec + Default>(cursor: &mut Cursor<'_>) -> CodecResult<Vec<T>> {
    let mut items = Vec::new();
    while !cursor.is_empty() {
        let start = cursor.offset();
        let mut item = T::default();
        item.deserialize(cursor)?;
        if cursor.offset() == start {
            break;
        }
        items.push(item);
    }
    Ok(items)
}

pub fn write_all<T: Codec>(cursor: &mut CursorMut<'_>, items: &[T]) -> CodecResult<()> {
    items.iter().try_for_each(|item| item.serialize(cursor))
}

pub fn total_size<T: Codec>(items: &[T]) -> usize {
    items.iter().map(Codec::size).sum()
}

/// Decode a `size`-byte region of header-dispatched elements.
///
/// Each element is resolved through `group`, decoded from its own start and
/// followed by zero padding up to `align`, measured from the region start. The
/// region must be consumed exactly.
pub fn read_sized_polymorphic(
    cursor: &mut Cursor<'_>,
    group: &Group,
    size: usize,
    align: usize,
) -> CodecResult<Vec<Box<dyn Codec>>> {
    let base = cursor.offset();
    let mut region = cursor.split_to(size)?;
    let mut items: Vec<Box<dyn Codec>> = Vec::new();

    while !region.is_empty() {
        let start = region.offset();
        let mut item = group
            .detect(&region)
            .map_err(|source| CodecError::Element {
                index: items.len(),
                offset: base + start,
                source: Box::new(source.rebase(base)),
            })?
            .codec;
        item.deserialize(&mut region)
            .and_then(|()| region.expect_padding(align))
            .map_err(|e| e.rebase(base))?;
        if region.offset() == start {
            return Err(CodecError::SizeMismatch {
                field: item.type_name(),
                declared: size,
                consumed: start,
            });
        }
        items.push(item);
    }

    log::trace!(
        "[catbuffer] {} region at byte {}: {} elements in {} bytes",
        group.name(),
        base,
        items.len(),
        size
    );
    Ok(items)
}

/// Encode elements written by [`read_sized_polymorphic`], padding each to `align`.
pub fn write_sized_polymorphic(
    cursor: &mut CursorMut<'_>,
    items: &[Box<dyn Codec>],
    align: usize,
) -> CodecResult<()> {
    let base = cursor.offset();
    for item in items {
        item.serialize(cursor)?;
        let padding = padding_for(cursor.offset() - base, align);
        cursor.write_and_advance(padding)?.fill(0);
    }
    Ok(())
}

/// Byte width of the region [`write_sized_polymorphic`] produces.
pub fn sized_polymorphic_len(items: &[Box<dyn Codec>], align: usize) -> usize {
    items.iter().fold(0, |len, item| {
        let end = len + item.size();
        end + padding_for(end, align)
    })
}
