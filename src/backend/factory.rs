//! Backend factory for creating a store from configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::{ContentStore, DatabaseStore, MemoryStore};
use crate::config::{BackendKind, StorageConfig};

/// Open the store selected by `config`.
///
/// # Errors
/// Returns error if:
/// - The database cannot be opened or its schema created
/// - Seeding the sample catalogue fails
pub async fn open(config: &StorageConfig) -> Result<Arc<dyn ContentStore>> {
    match config.backend {
        BackendKind::Memory => {
            let store = if config.seed_sample_data {
                MemoryStore::seeded().await.context("Failed to seed memory store")?
            } else {
                MemoryStore::empty()
            };
            log::info!("Using memory backend");
            Ok(Arc::new(store))
        }
        BackendKind::Database => {
            let store = DatabaseStore::connect(&config.database_url)
                .await
                .with_context(|| format!("Failed to open database at {}", config.database_url))?;
            if config.seed_sample_data {
                store.seed_if_empty().await.context("Failed to seed database")?;
            }
            log::info!("Using database backend");
            Ok(Arc::new(store))
        }
    }
}
