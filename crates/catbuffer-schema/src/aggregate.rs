// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Aggregate transactions: embedded transactions plus cosignatures.
//!
//! ```text
//! +------------------+---------+----------+-------------------------+---------------+
//! | transactions_hash| payload | reserved | embedded txs, 8-aligned | cosignatures  |
//! |       32         |  u32    |   u32    |     payload bytes       | until the end |
//! +------------------+---------+----------+-------------------------+---------------+
//! ```

use catbuffer::field::{
    count_as, expect_reserved, read_fill, read_sized_polymorphic, sized_polymorphic_len,
    total_size, write_all, write_sized_polymorphic,
};
use catbuffer::{Codec, CodecResult, Cursor, CursorMut, Print, PrintHint, Printer, Scalar};

use crate::header::Transaction;
use crate::mosaic::Cosignature;
use crate::registry::embedded_group;
use crate::types::{Hash256, TransactionType};

/// Embedded transactions are padded to this boundary inside the payload.
pub const EMBEDDED_ALIGNMENT: usize = 8;

#[derive(Debug, Default)]
pub struct AggregateTransactionBody {
    pub transactions_hash: Hash256,
    /// Any codec from the `EmbeddedTransaction` group.
    pub transactions: Vec<Box<dyn Codec>>,
    pub cosignatures: Vec<Cosignature>,
}

impl AggregateTransactionBody {
    /// Hash, payload size and reserved field.
    const FIXED_SIZE: usize = 40;

    pub fn push<T: Codec + 'static>(&mut self, transaction: T) {
        self.transactions.push(Box::new(transaction));
    }

    /// Width of the embedded transaction region, padding included.
    pub fn payload_size(&self) -> usize {
        sized_polymorphic_len(&self.transactions, EMBEDDED_ALIGNMENT)
    }
}

impl Print for AggregateTransactionBody {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "AggregateTransactionBody", self.size());
        p.bytes(level, "transactions_hash", &self.transactions_hash, PrintHint::Hex);
        p.scalar(level, "u32", "payload_size", self.payload_size(), 4);
        p.scalar(level, "u32", "aggregate_transaction_header_reserved_1", 0, 4);
        p.list_begin(level, "EmbeddedTransaction", "transactions", self.transactions.len());
        for transaction in &self.transactions {
            transaction.print(p, level + 1);
        }
        p.list_end(level, self.payload_size());
        p.list_begin(level, "Cosignature", "cosignatures", self.cosignatures.len());
        for cosignature in &self.cosignatures {
            cosignature.print(p, level + 1);
        }
        p.list_end(level, total_size(&self.cosignatures));
        p.end(level);
    }
}

impl Codec for AggregateTransactionBody {
    fn type_name(&self) -> &'static str {
        "AggregateTransactionBody"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.transactions_hash = Scalar::read(cursor)?;
        let payload_size = u32::read(cursor)?;
        expect_reserved(cursor, "aggregate_transaction_header_reserved_1", 0u32)?;
        let group = embedded_group(cursor.offset())?;
        self.transactions =
            read_sized_polymorphic(cursor, group, payload_size as usize, EMBEDDED_ALIGNMENT)?;
        self.cosignatures = read_fill(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.transactions_hash.write(cursor)?;
        count_as::<u32>("payload_size", self.payload_size())?.write(cursor)?;
        0u32.write(cursor)?;
        write_sized_polymorphic(cursor, &self.transactions, EMBEDDED_ALIGNMENT)?;
        write_all(cursor, &self.cosignatures)
    }

    fn size(&self) -> usize {
        Self::FIXED_SIZE + self.payload_size() + total_size(&self.cosignatures)
    }
}

transaction! {
    /// All signatures are present; executes immediately.
    #[derive(Debug)]
    AggregateCompleteTransaction {
        header: Transaction,
        body: AggregateTransactionBody,
        transaction_type: TransactionType::AGGREGATE_COMPLETE,
        version: 2,
    }
}

transaction! {
    /// Waits on chain for missing cosignatures.
    #[derive(Debug)]
    AggregateBondedTransaction {
        header: Transaction,
        body: AggregateTransactionBody,
        transaction_type: TransactionType::AGGREGATE_BONDED,
        version: 2,
    }
}
