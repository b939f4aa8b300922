use crate::{
    config::{RuntimeConfiguration, StoreConfig},
    data::{StudentStore, memory::MemoryStudentStore, postgres::PostgresStudentStore},
    error::{ApiResult, OpenDatabaseSnafu},
};
use snafu::ResultExt;
use sqlx::postgres::PgPoolOptions;
use std::{ops::Deref, sync::Arc};

/// Handed to every handler through axum's `State` extractor.
#[derive(Clone, Debug)]
pub struct ApiState {
    store: Arc<dyn StudentStore>,
}

impl ApiState {
    pub async fn new(config: &RuntimeConfiguration) -> ApiResult<Self> {
        let store: Arc<dyn StudentStore> = match config.store() {
            StoreConfig::Postgres(db_config) => {
                let pool = PgPoolOptions::new()
                    .max_connections(db_config.max_connections())
                    .connect(&db_config.get_db_path())
                    .await
                    .context(OpenDatabaseSnafu)?;
                info!(
                    max_connections = db_config.max_connections(),
                    "Connected to postgres"
                );
                Arc::new(PostgresStudentStore::new(pool))
            }
            StoreConfig::Memory => {
                warn!("Using the in-memory student store, nothing will be persisted");
                Arc::new(MemoryStudentStore::new())
            }
        };

        Ok(Self::with_store(store))
    }

    pub fn with_store(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn sensible_shutdown(&self) {
        self.store.close().await;
    }
}

impl Deref for ApiState {
    type Target = dyn StudentStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}
