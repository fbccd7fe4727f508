// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use catbuffer::{Codec, CodecResult, Cursor, CursorMut, Print, PrintHint, Printer, Scalar};

use crate::header::{EmbeddedTransaction, Transaction};
use crate::types::{LinkAction, PublicKey, TransactionType};

/// Links (or unlinks) a remote public key to the signer's account.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountKeyLinkTransactionBody {
    pub linked_public_key: PublicKey,
    pub link_action: LinkAction,
}

impl AccountKeyLinkTransactionBody {
    pub const SIZE: usize = 33;
}

impl Print for AccountKeyLinkTransactionBody {
    fn print(&self, p: &mut Printer, level: usize) {
        p.begin(level, "AccountKeyLinkTransactionBody", Self::SIZE);
        p.bytes(level, "linked_public_key", &self.linked_public_key, PrintHint::Hex);
        p.scalar(level, "LinkAction", "link_action", self.link_action, 1);
        p.end(level);
    }
}

impl Codec for AccountKeyLinkTransactionBody {
    fn type_name(&self) -> &'static str {
        "AccountKeyLinkTransactionBody"
    }

    fn deserialize(&mut self, cursor: &mut Cursor<'_>) -> CodecResult<()> {
        self.linked_public_key = Scalar::read(cursor)?;
        self.link_action = LinkAction::read(cursor)?;
        Ok(())
    }

    fn serialize(&self, cursor: &mut CursorMut<'_>) -> CodecResult<()> {
        self.linked_public_key.write(cursor)?;
        self.link_action.write(cursor)
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}

transaction! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    AccountKeyLinkTransaction {
        header: Transaction,
        body: AccountKeyLinkTransactionBody,
        transaction_type: TransactionType::ACCOUNT_KEY_LINK,
        version: 1,
    }
}

transaction! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    EmbeddedAccountKeyLinkTransaction {
        header: EmbeddedTransaction,
        body: AccountKeyLinkTransactionBody,
        transaction_type: TransactionType::ACCOUNT_KEY_LINK,
        version: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(AccountKeyLinkTransaction::default().size(), 161);
        assert_eq!(EmbeddedAccountKeyLinkTransaction::default().size(), 81);
    }

    #[test]
    fn test_truncated_body() {
        let tx = AccountKeyLinkTransaction::new(AccountKeyLinkTransactionBody {
            linked_public_key: [3; 32],
            link_action: LinkAction::LINK,
        });
        let bytes = tx.to_bytes().expect("encode");
        let mut decoded = AccountKeyLinkTransaction::default();
        let err = decoded
            .deserialize(&mut Cursor::new(&bytes[..160]))
            .unwrap_err();
        assert_eq!(err.offset(), Some(160));
    }
}
