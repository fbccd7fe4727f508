// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use catbuffer::{Codec, CodecResult, Cursor, CursorMut, Print, PrintHint, Printer, Scalar};

use crate::types::{Amount, PublicKey, Signature, UnresolvedMosaicId};

/// Mosaic id and amount pair attached to a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnresolvedMosaic {
    pub mosaic_id: UnresolvedMosaicId,
    pub amount: Amount,
}

impl UnresolvedMosaic {
    pub const SIZE: usize = 16;
}

impl Print for UnresolvedMosaic {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "UnresolvedMosaic", Self::SIZE);
        p.scalar(level, "UnresolvedMosaicId", "mosaic_id", self.mosaic_id, 8);
        p.scalar(level, "Amount", "amount", self.amount, 8);
        p.end(level);
    }
}

impl Codec for UnresolvedMosaic {
    fn type_name(&self) -> &'static str {
        "UnresolvedMosaic"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.mosaic_id = UnresolvedMosaicId::read(cursor)?;
        self.amount = Amount::read(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.mosaic_id.write(cursor)?;
        self.amount.write(cursor)
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}

/// Cosignature appended to an aggregate after its embedded transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cosignature {
    pub version: u64,
    pub signer_public_key: PublicKey,
    pub signature: Signature,
}

impl Cosignature {
    pub const SIZE: usize = 104;
}

impl Default for Cosignature {
    fn default() -> Self {
        Self {
            version: 0,
            signer_public_key: [0; 32],
            signature: [0; 64],
        }
    }
}

impl Print for Cosignature {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "Cosignature", Self::SIZE);
        p.scalar(level, "u64", "version", self.version, 8);
        p.bytes(level, "signer_public_key", &self.signer_public_key, PrintHint::Hex);
        p.bytes(level, "signature", &self.signature, PrintHint::Hex);
        p.end(level);
    }
}

impl Codec for Cosignature {
    fn type_name(&self) -> &'static str {
        "Cosignature"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.version = u64::read(cursor)?;
        self.signer_public_key = Scalar::read(cursor)?;
        self.signature = Scalar::read(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.version.write(cursor)?;
        self.signer_public_key.write(cursor)?;
        self.signature.write(cursor)
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}
