use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::ledger::{CategoryTotal, LedgerStore, Scope, Transaction};
use crate::storage::GoalStore;

use super::FinanceSnapshot;

/// Callback notified after each successful mutation.
pub type EventObserver = dyn Fn(&FinanceEvent) + Send + Sync;

/// Notification emitted by [`FinanceManager`] after a successful mutation.
///
/// Rejected calls never produce an event.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceEvent {
    IncomeRecorded { amount: f64, category: String },
    ExpenseRecorded { amount: f64, category: String },
    GoalUpdated { target: f64 },
}

/// Facade that coordinates the ledger, category totals, and the persisted
/// savings goal; the only type presentation code should depend on.
///
/// All mutating calls must originate from a single execution context; the
/// manager itself holds no locks. A multi-threaded host must serialize
/// access externally.
pub struct FinanceManager {
    ledger: LedgerStore,
    goal_store: Box<dyn GoalStore>,
    savings_target: f64,
    observers: Vec<Box<EventObserver>>,
}

impl FinanceManager {
    /// Creates a manager over the given goal store.
    ///
    /// The cached savings target starts at `0.0`; call
    /// [`refresh_savings_goal`](Self::refresh_savings_goal) to pick up a
    /// value saved in a prior session.
    pub fn new(goal_store: Box<dyn GoalStore>) -> Self {
        Self {
            ledger: LedgerStore::new(),
            goal_store,
            savings_target: 0.0,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after each successful mutation.
    ///
    /// Observers live as long as the manager; there is no unsubscribe.
    pub fn subscribe(&mut self, observer: Box<EventObserver>) {
        self.observers.push(observer);
    }

    /// Records an income event, propagating ledger validation errors
    /// unchanged.
    pub fn add_income(&mut self, amount: f64, category: &str) -> Result<()> {
        let transaction = self.ledger.record_income(amount, category)?;
        debug!(amount, category = %transaction.category, "income recorded");
        self.notify(&FinanceEvent::IncomeRecorded {
            amount: transaction.amount,
            category: transaction.category,
        });
        Ok(())
    }

    /// Records an expense event, propagating ledger validation errors
    /// unchanged.
    pub fn add_expense(&mut self, amount: f64, category: &str) -> Result<()> {
        let transaction = self.ledger.record_expense(amount, category)?;
        debug!(amount, category = %transaction.category, "expense recorded");
        self.notify(&FinanceEvent::ExpenseRecorded {
            amount: transaction.amount,
            category: transaction.category,
        });
        Ok(())
    }

    /// Persists a new savings target and updates the cached value.
    ///
    /// On a failed save the cache keeps its last-known-good value.
    pub fn set_savings_goal(&mut self, target: f64) -> Result<()> {
        if let Err(err) = self.goal_store.save(target) {
            warn!(target, %err, "savings goal save failed");
            return Err(err);
        }
        self.savings_target = target;
        info!(target, "savings goal updated and saved");
        self.notify(&FinanceEvent::GoalUpdated { target });
        Ok(())
    }

    /// Reloads the cached savings target from durable storage.
    ///
    /// Idempotent; intended to run at startup so a target saved in a prior
    /// session becomes visible. The cache does not auto-initialize from
    /// storage without this call. A failed load leaves the cache unchanged.
    pub fn refresh_savings_goal(&mut self) -> Result<()> {
        self.savings_target = self.goal_store.load()?;
        Ok(())
    }

    /// Computes a fresh snapshot from the current totals and cached target.
    pub fn snapshot(&self) -> FinanceSnapshot {
        FinanceSnapshot::compute(
            self.ledger.total_income(),
            self.ledger.total_expense(),
            self.savings_target,
        )
    }

    pub fn incomes(&self) -> Vec<(String, f64)> {
        self.ledger.incomes()
    }

    pub fn expenses(&self) -> Vec<(String, f64)> {
        self.ledger.expenses()
    }

    pub fn category_totals(&self, scope: Scope) -> &[CategoryTotal] {
        self.ledger.category_totals(scope)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    fn notify(&self, event: &FinanceEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}
