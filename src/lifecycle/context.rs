//! Process-scoped context.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::storage::{StorageError, StorageHandle};

/// Everything created once at startup and shared for the life of the
/// process.
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<GatewayConfig>,
    storage: StorageHandle,
}

impl AppContext {
    /// Connect storage and assemble the context. Any error here must stop
    /// the process before the listener is bound.
    pub async fn initialize(config: GatewayConfig) -> Result<Self, StorageError> {
        let storage = StorageHandle::connect(&config.storage).await?;
        Ok(Self {
            config: Arc::new(config),
            storage,
        })
    }

    pub fn config(&self) -> Arc<GatewayConfig> {
        Arc::clone(&self.config)
    }

    /// Release process-scoped resources.
    pub async fn close(self) {
        self.storage.close().await;
    }
}
