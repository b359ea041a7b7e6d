use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transaction::Transaction;

/// Finance-domain error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FinanceError {
    /// A savings account refused a debit larger than its balance.
    #[error("insufficient funds: requested {requested} minor units, available {available}")]
    InsufficientFunds { requested: i64, available: i64 },
}

/// Account behavior tag.
///
/// `Standard` accounts apply every debit, overdraft included. `Savings`
/// accounts refuse debits that exceed the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Standard,
    Savings,
}

/// Account: number, behavior tag, and balance in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    kind: AccountKind,
    balance_minor: i64,
}

impl Account {
    pub fn new(number: impl Into<String>, kind: AccountKind, opening_balance_minor: i64) -> Self {
        Self {
            number: number.into(),
            kind,
            balance_minor: opening_balance_minor,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance_minor(&self) -> i64 {
        self.balance_minor
    }

    /// Debit the transaction amount from the balance.
    ///
    /// Behavior is selected by the account's kind tag. On success the new
    /// balance is returned; on failure the balance is unchanged.
    pub fn apply(&mut self, transaction: &Transaction) -> Result<i64, FinanceError> {
        let amount = transaction.amount_minor();
        match self.kind {
            AccountKind::Standard => {
                self.balance_minor -= amount;
                Ok(self.balance_minor)
            }
            AccountKind::Savings => {
                if amount > self.balance_minor {
                    return Err(FinanceError::InsufficientFunds {
                        requested: amount,
                        available: self.balance_minor,
                    });
                }
                self.balance_minor -= amount;
                Ok(self.balance_minor)
            }
        }
    }
}
