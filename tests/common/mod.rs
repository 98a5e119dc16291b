use std::sync::Mutex;

use finance_core::{core::FinanceManager, storage::JsonPreferences};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique preferences directory.
///
/// The returned store points at the same directory, so tests can open a
/// second manager over it to simulate a process restart.
pub fn setup_test_env() -> (FinanceManager, JsonPreferences) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let prefs = JsonPreferences::new(Some(base)).expect("create preferences store");
    let manager = FinanceManager::new(Box::new(prefs.clone()));
    (manager, prefs)
}
