//! Ledger domain models and the append-only transaction store.

pub mod categories;
pub mod store;
pub mod transaction;

pub use categories::{CategoryAggregator, CategoryTotal, Scope};
pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionKind};
