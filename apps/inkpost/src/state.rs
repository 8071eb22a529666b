//! Application state - the store binding chosen by configuration and the docs
//! assistant, when the build can reach a backend.

use std::sync::Arc;

use inkpost_core::ports::{DocsAssistant, PostStore};
use inkpost_infra::{FileKeyValueStore, LocalPostStore};

#[cfg(feature = "remote")]
use inkpost_infra::{HttpClient, RemoteDocsAssistant, RemotePostStore};

use crate::config::{AppConfig, StoreBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub assistant: Option<Arc<dyn DocsAssistant>>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let store: Arc<dyn PostStore> = match config.store {
            StoreBackend::Local => {
                tracing::debug!(data_dir = %config.data_dir.display(), "Using local store");
                let kv = Arc::new(FileKeyValueStore::new(&config.data_dir));
                Arc::new(LocalPostStore::new(kv))
            }
            #[cfg(feature = "remote")]
            StoreBackend::Remote => {
                tracing::debug!(api_url = %config.api_url, "Using remote store");
                Arc::new(RemotePostStore::new(HttpClient::new(&config.api_url)))
            }
            #[cfg(not(feature = "remote"))]
            StoreBackend::Remote => {
                anyhow::bail!("this build has no remote store support (enable the `remote` feature)")
            }
        };

        #[cfg(feature = "remote")]
        let assistant: Option<Arc<dyn DocsAssistant>> = Some(Arc::new(RemoteDocsAssistant::new(
            HttpClient::new(&config.api_url),
        )));
        #[cfg(not(feature = "remote"))]
        let assistant: Option<Arc<dyn DocsAssistant>> = None;

        Ok(Self { store, assistant })
    }
}
