use serde::{Deserialize, Serialize};

/// Whether a category total belongs to the income or the expense side of
/// the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    Income,
    Expense,
}

/// Signed running total for a single category label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Running per-category totals, kept separately for incomes and expenses.
///
/// Entries stay in first-seen order so callers get a deterministic display
/// order. A category is never removed once created, even when its total
/// returns to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryAggregator {
    income: Vec<CategoryTotal>,
    expense: Vec<CategoryTotal>,
}

impl CategoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `signed_amount` to `category` under `scope`, initializing the
    /// entry on first sight.
    pub fn add(&mut self, scope: Scope, category: &str, signed_amount: f64) {
        let entries = self.entries_mut(scope);
        match entries.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.total += signed_amount,
            None => entries.push(CategoryTotal {
                category: category.to_string(),
                total: signed_amount,
            }),
        }
    }

    /// Current totals under `scope`, in first-seen order.
    pub fn totals(&self, scope: Scope) -> &[CategoryTotal] {
        match scope {
            Scope::Income => &self.income,
            Scope::Expense => &self.expense,
        }
    }

    fn entries_mut(&mut self, scope: Scope) -> &mut Vec<CategoryTotal> {
        match scope {
            Scope::Income => &mut self.income,
            Scope::Expense => &mut self.expense,
        }
    }
}
