use std::sync::Arc;

use crate::commands::config::{read_config, resolve_scoring_table};
use crate::persona::ScoringTable;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::util::data_dir;

/// Managed Tauri state shared by all commands.
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub table: Arc<ScoringTable>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, table: ScoringTable) -> Self {
        Self {
            store,
            table: Arc::new(table),
        }
    }

    /// Reads config from the data directory and opens the store there.
    /// Without a home directory nothing is persisted between launches.
    pub fn load() -> Self {
        let Some(dir) = data_dir() else {
            tracing::warn!("No home directory found, onboarding state will not persist");
            return Self::new(
                Arc::new(MemoryStore::default()),
                ScoringTable::builtin().clone(),
            );
        };

        let config = read_config(&dir);
        let table = resolve_scoring_table(&config);
        let store = JsonFileStore::in_dir(&dir);
        tracing::info!("Using store at {}", store.path().display());

        Self::new(Arc::new(store), table)
    }
}
