// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;
use urlscan_core::{CommandExecutor, ShellExecutor};
use urlscan_db::{DbError, ScanStore};

/// Global application state shared by all handlers.
///
/// The store is opened once here and held for the lifetime of the server;
/// handlers serialize access through the mutex and rely on SQLite's own
/// isolation for durability.
pub struct AppState {
    /// Runs the external scanning tools. Swapped for a stub in tests.
    pub executor: Arc<dyn CommandExecutor>,
    /// Persistent scan log.
    pub store: Mutex<ScanStore>,
}

impl AppState {
    pub fn new(db_path: &Path) -> Result<Self, DbError> {
        let store = ScanStore::open(db_path)?;
        Ok(Self {
            executor: Arc::new(ShellExecutor),
            store: Mutex::new(store),
        })
    }

    /// Create an AppState with an in-memory database and the given executor
    /// (for testing).
    pub fn new_in_memory(executor: Arc<dyn CommandExecutor>) -> Self {
        let store = ScanStore::open_in_memory().expect("failed to open in-memory database");
        Self {
            executor,
            store: Mutex::new(store),
        }
    }
}
