pub mod manager;
pub mod snapshot;

pub use manager::{EventObserver, FinanceEvent, FinanceManager};
pub use snapshot::FinanceSnapshot;
