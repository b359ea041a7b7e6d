use crate::transaction::{format_minor, Transaction};
use recordworks_core::Entity;

/// Payment-channel capability: turn a transaction into the channel's
/// confirmation line. Implementations hold no state.
pub trait TransactionProcessor {
    fn process(&self, transaction: &Transaction) -> String;
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[BankTransfer] Processing {} for {} on {} (Id: {}).",
            format_minor(transaction.amount_minor()),
            transaction.category(),
            transaction.date().format("%Y-%m-%d"),
            transaction.id(),
        )
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[MobileMoney] {} spent on {} (Id: {}) via Mobile Money.",
            format_minor(transaction.amount_minor()),
            transaction.category(),
            transaction.id(),
        )
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[CryptoWallet] {} spent on {} (Id: {}) via Crypto Wallet.",
            format_minor(transaction.amount_minor()),
            transaction.category(),
            transaction.id(),
        )
    }
}
