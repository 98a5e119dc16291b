use crate::errors::{FinanceError, Result};

use super::{CategoryAggregator, CategoryTotal, Scope, Transaction, TransactionKind};

/// Append-only log of income and expense events; source of truth for the
/// session totals.
///
/// The store owns the [`CategoryAggregator`] and feeds it on every
/// successful append, so category totals can never drift from the log.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    entries: Vec<Transaction>,
    categories: CategoryAggregator,
    total_income: f64,
    total_expense: f64,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an income event and returns the appended transaction.
    pub fn record_income(&mut self, amount: f64, category: &str) -> Result<Transaction> {
        let category = validate(amount, category)?;
        let transaction = Transaction::new(amount, category, TransactionKind::Income);
        self.total_income += amount;
        self.categories
            .add(Scope::Income, &transaction.category, amount);
        self.entries.push(transaction.clone());
        Ok(transaction)
    }

    /// Records an expense event and returns the appended transaction.
    ///
    /// The category accumulates the negated amount so its total is always a
    /// contribution to the balance, not a magnitude.
    pub fn record_expense(&mut self, amount: f64, category: &str) -> Result<Transaction> {
        let category = validate(amount, category)?;
        let transaction = Transaction::new(amount, category, TransactionKind::Expense);
        self.total_expense += amount;
        self.categories
            .add(Scope::Expense, &transaction.category, -amount);
        self.entries.push(transaction.clone());
        Ok(transaction)
    }

    pub fn total_income(&self) -> f64 {
        self.total_income
    }

    pub fn total_expense(&self) -> f64 {
        self.total_expense
    }

    /// Snapshot of recorded incomes as `(category, amount)` pairs in
    /// insertion order.
    pub fn incomes(&self) -> Vec<(String, f64)> {
        self.listed(TransactionKind::Income)
    }

    /// Snapshot of recorded expenses in insertion order; amounts carry the
    /// expense sign convention (negative contribution to the balance).
    pub fn expenses(&self) -> Vec<(String, f64)> {
        self.listed(TransactionKind::Expense)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn category_totals(&self, scope: Scope) -> &[CategoryTotal] {
        self.categories.totals(scope)
    }

    fn listed(&self, kind: TransactionKind) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .filter(|txn| txn.kind == kind)
            .map(|txn| (txn.category.clone(), txn.signed_amount()))
            .collect()
    }
}

/// Validates an append request before any state is touched, returning the
/// trimmed category label.
fn validate(amount: f64, category: &str) -> Result<String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(FinanceError::InvalidAmount(format!(
            "amount must be positive, got {amount}"
        )));
    }
    let trimmed = category.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::InvalidCategory(
            "category label must not be blank".into(),
        ));
    }
    Ok(trimmed.to_string())
}
