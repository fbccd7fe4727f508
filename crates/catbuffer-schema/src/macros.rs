// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

/// Define a concrete transaction as a header followed by a body.
///
/// Generates the struct, its `(type, version)` constants, a constructor that
/// stamps the header, and the `Print`/`Codec` impls that chain header and body.
macro_rules! transaction {
    (
        $(#[$meta:meta])*
        $name:ident {
            header: $header:ty,
            body: $body:ty,
            transaction_type: $kind:expr,
            version: $version:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            pub header: $header,
            pub body: $body,
        }

        impl $name {
            pub const TRANSACTION_TYPE: $crate::types::TransactionType = $kind;
            pub const TRANSACTION_VERSION: u8 = $version;

            /// Wrap `body` in a header stamped with this type, version and size.
            ///
            /// A body too wide for the `u32` size field leaves `size` at zero
            /// and logs a warning; [`Self::refresh_size`] reports it as an error.
            pub fn new(body: $body) -> Self {
                let mut tx = Self {
                    header: <$header>::default(),
                    body,
                };
                $crate::header::Header::set_kind(
                    &mut tx.header,
                    Self::TRANSACTION_TYPE,
                    Self::TRANSACTION_VERSION,
                );
                if let Err(err) = tx.refresh_size() {
                    log::warn!("[catbuffer-schema] {}: {}", stringify!($name), err);
                }
                tx
            }

            /// Rewrite the header `size` field from the current contents.
            ///
            /// Fails with `CountOverflow` if the value no longer fits in `u32`;
            /// the header is left untouched in that case.
            pub fn refresh_size(&mut self) -> catbuffer::CodecResult<()> {
                let size: u32 =
                    catbuffer::field::count_as("size", catbuffer::Codec::size(self))?;
                $crate::header::Header::set_declared_size(&mut self.header, size);
                Ok(())
            }

            pub const fn discriminant() -> catbuffer::Discriminant {
                catbuffer::Discriminant::new(
                    Self::TRANSACTION_TYPE.0 as u32,
                    Self::TRANSACTION_VERSION as u32,
                )
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(<$body>::default())
            }
        }

        impl catbuffer::Print for $name {
            fn print(&self, p: &mut catbuffer::Printer, level: usize) {
                p.begin(level, stringify!($name), catbuffer::Codec::size(self));
                catbuffer::Print::print(&self.header, p, level + 1);
                catbuffer::Print::print(&self.body, p, level + 1);
                p.end(level);
            }
        }

        impl catbuffer::Codec for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn deserialize(
                &mut self,
                cursor: &mut catbuffer::Cursor<'_>,
            ) -> catbuffer::CodecResult<()> {
                catbuffer::Codec::deserialize(&mut self.header, cursor)?;
                catbuffer::Codec::deserialize(&mut self.body, cursor)
            }

            fn serialize(
                &self,
                cursor: &mut catbuffer::CursorMut<'_>,
            ) -> catbuffer::CodecResult<()> {
                catbuffer::Codec::serialize(&self.header, cursor)?;
                catbuffer::Codec::serialize(&self.body, cursor)
            }

            fn size(&self) -> usize {
                catbuffer::Codec::size(&self.header) + catbuffer::Codec::size(&self.body)
            }
        }
    };
}
