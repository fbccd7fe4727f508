// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Name and discriminant tables for every type in this crate.

use std::sync::OnceLock;

use catbuffer::{factory, CodecError, CodecResult, DetectError, Group, Registry, RegistryError};

use crate::aggregate::{
    AggregateBondedTransaction, AggregateCompleteTransaction, AggregateTransactionBody,
};
use crate::header::{EmbeddedTransaction, Transaction};
use crate::key_link::{
    AccountKeyLinkTransaction, AccountKeyLinkTransactionBody, EmbeddedAccountKeyLinkTransaction,
};
use crate::mosaic::{Cosignature, UnresolvedMosaic};
use crate::transfer::{EmbeddedTransferTransaction, TransferTransaction, TransferTransactionBody};

/// Top-level transactions, dispatched on the 128-byte signed header.
pub const TRANSACTION_GROUP: &str = "Transaction";
/// Transactions nested in aggregates, dispatched on the 48-byte header.
pub const EMBEDDED_TRANSACTION_GROUP: &str = "EmbeddedTransaction";

/// Assemble a fresh registry. Fails only if two entries collide.
///
/// Name lookup and top-level detection use the returned tables, but aggregate
/// bodies always resolve their embedded transactions through the process-wide
/// [`registry()`], whichever registry started the decode.
pub fn build_registry() -> Result<Registry, RegistryError> {
    let mut builder = Registry::builder();

    builder
        .codec(factory::<Transaction>)?
        .codec(factory::<EmbeddedTransaction>)?
        .codec(factory::<UnresolvedMosaic>)?
        .codec(factory::<Cosignature>)?
        .codec(factory::<TransferTransactionBody>)?
        .codec(factory::<TransferTransaction>)?
        .codec(factory::<EmbeddedTransferTransaction>)?
        .codec(factory::<AccountKeyLinkTransactionBody>)?
        .codec(factory::<AccountKeyLinkTransaction>)?
        .codec(factory::<EmbeddedAccountKeyLinkTransaction>)?
        .codec(factory::<AggregateTransactionBody>)?
        .codec(factory::<AggregateCompleteTransaction>)?
        .codec(factory::<AggregateBondedTransaction>)?;

    builder
        .group(TRANSACTION_GROUP, Transaction::probe)?
        .variant(
            TransferTransaction::discriminant(),
            factory::<TransferTransaction>,
        )?
        .variant(
            AccountKeyLinkTransaction::discriminant(),
            factory::<AccountKeyLinkTransaction>,
        )?
        .variant(
            AggregateCompleteTransaction::discriminant(),
            factory::<AggregateCompleteTransaction>,
        )?
        .variant(
            AggregateBondedTransaction::discriminant(),
            factory::<AggregateBondedTransaction>,
        )?;

    builder
        .group(EMBEDDED_TRANSACTION_GROUP, EmbeddedTransaction::probe)?
        .variant(
            EmbeddedTransferTransaction::discriminant(),
            factory::<EmbeddedTransferTransaction>,
        )?
        .variant(
            EmbeddedAccountKeyLinkTransaction::discriminant(),
            factory::<EmbeddedAccountKeyLinkTransaction>,
        )?;

    Ok(builder.build())
}

/// Process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        build_registry().unwrap_or_else(|err| {
            log::error!("[catbuffer-schema] registry build failed: {}", err);
            Registry::default()
        })
    })
}

/// Group used to dispatch aggregate payload elements, always from [`registry()`].
pub(crate) fn embedded_group(offset: usize) -> CodecResult<&'static Group> {
    registry()
        .group(EMBEDDED_TRANSACTION_GROUP)
        .ok_or_else(|| CodecError::Element {
            index: 0,
            offset,
            source: Box::new(DetectError::UnknownGroup(
                EMBEDDED_TRANSACTION_GROUP.to_string(),
            )),
        })
}
