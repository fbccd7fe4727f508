// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transaction codecs in the shape a catbuffer schema compiler emits.
//!
//! Every layout is little-endian. Concrete transactions repeat their group's
//! header, so they decode from the start of the envelope:
//!
//! ```text
//! Transaction group            EmbeddedTransaction group
//! +-----------------------+    +-----------------------+
//! | Transaction (128)     |    | EmbeddedTransaction   |
//! |   size, signature,    |    |   (48) size, signer,  |
//! |   signer, version,    |    |   version, network,   |
//! |   network, type, fee, |    |   type                |
//! |   deadline            |    +-----------------------+
//! +-----------------------+    | body                  |
//! | body                  |    +-----------------------+
//! +-----------------------+
//! ```
//!
//! | Type | Code | Version |
//! |------|------|---------|
//! | [`TransferTransaction`] | `0x4154` | 1 |
//! | [`AccountKeyLinkTransaction`] | `0x414C` | 1 |
//! | [`AggregateCompleteTransaction`] | `0x4141` | 2 |
//! | [`AggregateBondedTransaction`] | `0x4241` | 2 |

#[macro_use]
mod macros;

pub mod aggregate;
pub mod header;
pub mod key_link;
pub mod mosaic;
pub mod registry;
pub mod transfer;
pub mod types;

pub use aggregate::{
    AggregateBondedTransaction, AggregateCompleteTransaction, AggregateTransactionBody,
};
pub use header::{EmbeddedTransaction, Header, Transaction};
pub use key_link::{
    AccountKeyLinkTransaction, AccountKeyLinkTransactionBody, EmbeddedAccountKeyLinkTransaction,
};
pub use mosaic::{Cosignature, UnresolvedMosaic};
pub use registry::{build_registry, registry, EMBEDDED_TRANSACTION_GROUP, TRANSACTION_GROUP};
pub use transfer::{EmbeddedTransferTransaction, TransferTransaction, TransferTransactionBody};
pub use types::{LinkAction, NetworkType, TransactionType};
