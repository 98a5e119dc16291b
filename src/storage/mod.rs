pub mod prefs;

pub use prefs::{app_data_dir, JsonPreferences};

use crate::errors::Result;

/// Key of the persisted savings-goal slot.
pub const SAVINGS_GOAL_KEY: &str = "meta_ahorro";

/// Abstraction over the durable key-value slot holding the savings target.
pub trait GoalStore: Send + Sync {
    /// Returns the previously saved target, or `0.0` when the slot has
    /// never been written. Absence is a valid default, not an error.
    fn load(&self) -> Result<f64>;

    /// Persists `target` so a subsequent [`load`](GoalStore::load) returns
    /// it at 32-bit float precision, including after a process restart.
    ///
    /// Implementations must reject a negative target with
    /// [`InvalidAmount`](crate::errors::FinanceError::InvalidAmount) before
    /// touching storage.
    fn save(&self, target: f64) -> Result<()>;
}
