//! Finance module: transactions, payment-channel processors, and accounts.
//!
//! Amounts are `i64` minor units (cents). Account behavior is selected by an
//! explicit `AccountKind` tag, not dynamic dispatch.

pub mod account;
pub mod processor;
pub mod transaction;

pub use account::{Account, AccountKind, FinanceError};
pub use processor::{
    BankTransferProcessor, CryptoWalletProcessor, MobileMoneyProcessor, TransactionProcessor,
};
pub use transaction::{format_minor, Transaction, TransactionId};
