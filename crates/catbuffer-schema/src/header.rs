// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared transaction headers and the probes that dispatch on them.

use catbuffer::field::expect_reserved;
use catbuffer::{
    Codec, CodecResult, Cursor, CursorMut, Discriminant, Print, PrintHint, Printer, Scalar,
};

use crate::types::{Amount, NetworkType, PublicKey, Signature, Timestamp, TransactionType};

/// Header fields every transaction layout starts with.
pub trait Header: Codec + Default {
    /// Wire width of the header alone.
    const SIZE: usize;

    fn transaction_type(&self) -> TransactionType;

    fn version(&self) -> u8;

    /// Stamp type and version, as a generated constructor does.
    fn set_kind(&mut self, transaction_type: TransactionType, version: u8);

    /// Value of the leading `size` field.
    fn declared_size(&self) -> u32;

    fn set_declared_size(&mut self, size: u32);

    fn discriminant(&self) -> Discriminant {
        Discriminant::new(
            u32::from(self.transaction_type().0),
            u32::from(self.version()),
        )
    }
}

/// Header of a top-level (signed) transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub size: u32,
    pub signature: Signature,
    pub signer_public_key: PublicKey,
    pub version: u8,
    pub network: NetworkType,
    pub transaction_type: TransactionType,
    pub fee: Amount,
    pub deadline: Timestamp,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            size: 0,
            signature: [0; 64],
            signer_public_key: [0; 32],
            version: 0,
            network: NetworkType::default(),
            transaction_type: TransactionType::default(),
            fee: 0,
            deadline: 0,
        }
    }
}

impl Transaction {
    /// [`HeaderProbe`](catbuffer::HeaderProbe) for the `Transaction` group.
    pub fn probe(cursor: &mut Cursor<'_>) -> CodecResult<Discriminant> {
        let mut header = Self::default();
        header.deserialize(cursor)?;
        Ok(header.discriminant())
    }
}

impl Header for Transaction {
    const SIZE: usize = 128;

    fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    fn version(&self) -> u8 {
        self.version
    }

    fn set_kind(&mut self, transaction_type: TransactionType, version: u8) {
        self.transaction_type = transaction_type;
        self.version = version;
    }

    fn declared_size(&self) -> u32 {
        self.size
    }

    fn set_declared_size(&mut self, size: u32) {
        self.size = size;
    }
}

impl Print for Transaction {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "Transaction", Self::SIZE);
        p.scalar(level, "u32", "size", self.size, 4);
        p.scalar(level, "u32", "verifiable_entity_header_reserved_1", 0, 4);
        p.bytes(level, "signature", &self.signature, PrintHint::Hex);
        p.bytes(level, "signer_public_key", &self.signer_public_key, PrintHint::Hex);
        p.scalar(level, "u32", "entity_body_reserved_1", 0, 4);
        p.scalar(level, "u8", "version", self.version, 1);
        p.scalar(level, "NetworkType", "network", self.network, 1);
        p.scalar(level, "TransactionType", "type", self.transaction_type, 2);
        p.scalar(level, "Amount", "fee", self.fee, 8);
        p.scalar(level, "Timestamp", "deadline", self.deadline, 8);
        p.end(level);
    }
}

impl Codec for Transaction {
    fn type_name(&self) -> &'static str {
        "Transaction"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.size = u32::read(cursor)?;
        expect_reserved(cursor, "verifiable_entity_header_reserved_1", 0u32)?;
        self.signature = Scalar::read(cursor)?;
        self.signer_public_key = Scalar::read(cursor)?;
        expect_reserved(cursor, "entity_body_reserved_1", 0u32)?;
        self.version = u8::read(cursor)?;
        self.network = NetworkType::read(cursor)?;
        self.transaction_type = TransactionType::read(cursor)?;
        self.fee = Amount::read(cursor)?;
        self.deadline = Timestamp::read(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.size.write(cursor)?;
        0u32.write(cursor)?;
        self.signature.write(cursor)?;
        self.signer_public_key.write(cursor)?;
        0u32.write(cursor)?;
        self.version.write(cursor)?;
        self.network.write(cursor)?;
        self.transaction_type.write(cursor)?;
        self.fee.write(cursor)?;
        self.deadline.write(cursor)
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}

/// Header of a transaction nested inside an aggregate. Carries no signature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmbeddedTransaction {
    pub size: u32,
    pub signer_public_key: PublicKey,
    pub version: u8,
    pub network: NetworkType,
    pub transaction_type: TransactionType,
}

impl EmbeddedTransaction {
    /// [`HeaderProbe`](catbuffer::HeaderProbe) for the `EmbeddedTransaction` group.
    pub fn probe(cursor: &mut Cursor<'_>) -> CodecResult<Discriminant> {
        let mut header = Self::default();
        header.deserialize(cursor)?;
        Ok(header.discriminant())
    }
}

impl Header for EmbeddedTransaction {
    const SIZE: usize = 48;

    fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    fn version(&self) -> u8 {
        self.version
    }

    fn set_kind(&mut self, transaction_type: TransactionType, version: u8) {
        self.transaction_type = transaction_type;
        self.version = version;
    }

    fn declared_size(&self) -> u32 {
        self.size
    }

    fn set_declared_size(&mut self, size: u32) {
        self.size = size;
    }
}

impl Print for EmbeddedTransaction {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "EmbeddedTransaction", Self::SIZE);
        p.scalar(level, "u32", "size", self.size, 4);
        p.scalar(level, "u32", "embedded_transaction_header_reserved_1", 0, 4);
        p.bytes(level, "signer_public_key", &self.signer_public_key, PrintHint::Hex);
        p.scalar(level, "u32", "entity_body_reserved_1", 0, 4);
        p.scalar(level, "u8", "version", self.version, 1);
        p.scalar(level, "NetworkType", "network", self.network, 1);
        p.scalar(level, "TransactionType", "type", self.transaction_type, 2);
        p.end(level);
    }
}

impl Codec for EmbeddedTransaction {
    fn type_name(&self) -> &'static str {
        "EmbeddedTransaction"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.size = u32::read(cursor)?;
        expect_reserved(cursor, "embedded_transaction_header_reserved_1", 0u32)?;
        self.signer_public_key = Scalar::read(cursor)?;
        expect_reserved(cursor, "entity_body_reserved_1", 0u32)?;
        self.version = u8::read(cursor)?;
        self.network = NetworkType::read(cursor)?;
        self.transaction_type = TransactionType::read(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.size.write(cursor)?;
        0u32.write(cursor)?;
        self.signer_public_key.write(cursor)?;
        0u32.write(cursor)?;
        self.version.write(cursor)?;
        self.network.write(cursor)?;
        self.transaction_type.write(cursor)
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer::CodecError;

    #[test]
    fn test_transaction_header_layout() {
        let mut header = Transaction {
            size: 128,
            fee: 100,
            deadline: 7,
            network: NetworkType::TESTNET,
            ..Transaction::default()
        };
        header.set_kind(TransactionType::TRANSFER, 1);
        header.signer_public_key[0] = 0xAB;

        let bytes = header.to_bytes().expect("encode");
        assert_eq!(bytes.len(), Transaction::SIZE);
        assert_eq!(&bytes[0..4], &128u32.to_le_bytes());
        assert_eq!(bytes[72], 0xAB);
        assert_eq!(bytes[108], 1);
        assert_eq!(bytes[109], 0x98);
        assert_eq!(&bytes[110..112], &[0x54, 0x41]);

        let probed = Transaction::probe(&mut Cursor::new(&bytes)).expect("probe");
        assert_eq!(probed, Discriminant::new(0x4154, 1));
    }

    #[test]
    fn test_embedded_reserved_must_be_zero() {
        let mut bytes = EmbeddedTransaction::default().to_bytes().expect("encode");
        bytes[4] = 1;
        let err = EmbeddedTransaction::probe(&mut Cursor::new(&bytes)).unwrap_err();
        assert_eq!(
            err,
            CodecError::ReservedMismatch {
                field: "embedded_transaction_header_reserved_1",
                offset: 4,
                expected: 0,
                found: 1
            }
        );
    }

    #[test]
    fn test_probe_truncated_header() {
        let bytes = [0u8; 100];
        let err = Transaction::probe(&mut Cursor::new(&bytes)).unwrap_err();
        assert!(err.is_bounds());
    }
}
