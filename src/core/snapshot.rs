use serde::Serialize;

/// Point-in-time view combining raw totals and derived metrics.
///
/// Snapshots are computed on demand and never stored; they are not a
/// source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSnapshot {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub savings_target: f64,
    pub savings_progress: f64,
}

impl FinanceSnapshot {
    pub(crate) fn compute(total_income: f64, total_expense: f64, savings_target: f64) -> Self {
        let balance = total_income - total_expense;
        // Progress is defined as exactly 0.0 when no target is set.
        let savings_progress = if savings_target > 0.0 {
            (balance / savings_target).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            total_income,
            total_expense,
            balance,
            savings_target,
            savings_progress,
        }
    }
}
