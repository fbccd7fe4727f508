// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema aliases and enumerations.
//!
//! Enumerations are open newtypes: any wire value decodes, and the named
//! constants cover the values the schema defines.

use std::fmt;

use catbuffer::{CodecResult, Cursor, CursorMut, Scalar};

pub type Amount = u64;
pub type UnresolvedMosaicId = u64;
pub type Timestamp = u64;
pub type Address = [u8; 24];
pub type PublicKey = [u8; 32];
pub type Signature = [u8; 64];
pub type Hash256 = [u8; 32];

/// Implement [`Scalar`] and a named `Display` for an open enumeration.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) { $($(#[$vmeta:meta])* $variant:ident = $value:expr),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(pub $repr);

        impl $name {
            $($(#[$vmeta])* pub const $variant: Self = Self($value);)*

            /// Schema name of the value, if it is one the schema defines.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => Some(stringify!($variant)),)*
                    _ => None,
                }
            }
        }

        impl Scalar for $name {
            const WIDTH: usize = <$repr as Scalar>::WIDTH;

            fn read(cursor: &mut Cursor<'_>) -> CodecResult<Self> {
                <$repr>::read(cursor).map(Self)
            }

            fn write(self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
                self.0.write(cursor)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{} ({})", self.0, name),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    };
}

open_enum! {
    /// Transaction type code carried in every transaction header.
    TransactionType(u16) {
        TRANSFER = 0x4154,
        ACCOUNT_KEY_LINK = 0x414C,
        AGGREGATE_COMPLETE = 0x4141,
        AGGREGATE_BONDED = 0x4241,
    }
}

open_enum! {
    /// Network a transaction is bound to.
    NetworkType(u8) {
        MAINNET = 0x68,
        TESTNET = 0x98,
    }
}

open_enum! {
    LinkAction(u8) {
        UNLINK = 0,
        LINK = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_enum_display() {
        assert_eq!(TransactionType::TRANSFER.to_string(), "16724 (TRANSFER)");
        assert_eq!(TransactionType(7).to_string(), "7");
        assert_eq!(NetworkType::TESTNET.name(), Some("TESTNET"));
        assert_eq!(LinkAction::default(), LinkAction::UNLINK);
    }

    #[test]
    fn test_open_enum_accepts_unknown_values() {
        let bytes = [0xFF, 0xFF];
        let value = TransactionType::read(&mut Cursor::new(&bytes)).expect("read");
        assert_eq!(value, TransactionType(0xFFFF));
        assert_eq!(value.name(), None);
    }
}
