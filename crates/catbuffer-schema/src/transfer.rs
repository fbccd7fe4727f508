// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Transfer of mosaics and an optional message to a recipient.

use catbuffer::field::{count_as, expect_reserved, read_counted, total_size, write_all};
use catbuffer::{Codec, CodecResult, Cursor, CursorMut, Print, PrintHint, Printer, Scalar};

use crate::header::{EmbeddedTransaction, Transaction};
use crate::mosaic::UnresolvedMosaic;
use crate::types::{Address, TransactionType};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransferTransactionBody {
    pub recipient_address: Address,
    /// Written with a `u8` count prefix, so at most 255 entries serialize.
    pub mosaics: Vec<UnresolvedMosaic>,
    pub message: Vec<u8>,
}

impl TransferTransactionBody {
    /// Address, both prefixes and both reserved fields.
    const FIXED_SIZE: usize = 32;
}

impl Print for TransferTransactionBody {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "TransferTransactionBody", self.size());
        p.bytes(level, "recipient_address", &self.recipient_address, PrintHint::Hex);
        p.scalar(level, "u16", "message_size", self.message.len(), 2);
        p.scalar(level, "u8", "mosaics_count", self.mosaics.len(), 1);
        p.scalar(level, "u32", "transfer_transaction_body_reserved_1", 0, 4);
        p.scalar(level, "u8", "transfer_transaction_body_reserved_2", 0, 1);
        p.list_begin(level, "UnresolvedMosaic", "mosaics", self.mosaics.len());
        for mosaic in &self.mosaics {
            mosaic.print(p, level + 1);
        }
        p.list_end(level, total_size(&self.mosaics));
        p.bytes(level, "message", &self.message, PrintHint::Ascii);
        p.end(level);
    }
}

impl Codec for TransferTransactionBody {
    fn type_name(&self) -> &'static str {
        "TransferTransactionBody"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.recipient_address = Scalar::read(cursor)?;
        let message_size = u16::read(cursor)?;
        let mosaics_count = u8::read(cursor)?;
        expect_reserved(cursor, "transfer_transaction_body_reserved_1", 0u32)?;
        expect_reserved(cursor, "transfer_transaction_body_reserved_2", 0u8)?;
        self.mosaics = read_counted(cursor, usize::from(mosaics_count))?;
        self.message = cursor.read_and_advance(usize::from(message_size))?.to_vec();
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.recipient_address.write(cursor)?;
        count_as::<u16>("message_size", self.message.len())?.write(cursor)?;
        count_as::<u8>("mosaics_count", self.mosaics.len())?.write(cursor)?;
        0u32.write(cursor)?;
        0u8.write(cursor)?;
        write_all(cursor, &self.mosaics)?;
        cursor.write_bytes(&self.message)
    }

    fn size(&self) -> usize {
        Self::FIXED_SIZE + total_size(&self.mosaics) + self.message.len()
    }
}

transaction! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    TransferTransaction {
        header: Transaction,
        body: TransferTransactionBody,
        transaction_type: TransactionType::TRANSFER,
        version: 1,
    }
}

transaction! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    EmbeddedTransferTransaction {
        header: EmbeddedTransaction,
        body: TransferTransactionBody,
        transaction_type: TransactionType::TRANSFER,
        version: 1,
    }
}
