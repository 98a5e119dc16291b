use serde::{Deserialize, Serialize};

/// A single recorded income or expense event.
///
/// Transactions are created through [`LedgerStore`](super::LedgerStore)
/// append operations and are never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
}

impl Transaction {
    pub fn new(amount: f64, category: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
        }
    }

    /// Contribution of this transaction to the running balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Side of the ledger a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}
