use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::store::{CallStore, MemoryCallStore, SupabaseCallStore};

/// Shared state handed to every handler
///
/// Requests are independent; the only thing shared between them is the
/// call store handle, and the backend behind it serializes writes itself.
pub struct AppState {
    pub config: ServerConfig,
    /// None when Supabase credentials are absent or the client could not be built
    pub call_store: Option<Arc<dyn CallStore>>,
}

impl AppState {
    /// Build state from configuration, creating a Supabase store when credentials exist
    pub async fn new(config: ServerConfig) -> Arc<Self> {
        let call_store = build_supabase_store(&config);
        Arc::new(Self { config, call_store })
    }

    /// Build state around an existing store
    ///
    /// The credential presence check still applies to every request.
    pub fn with_call_store(config: ServerConfig, store: Arc<dyn CallStore>) -> Arc<Self> {
        Arc::new(Self {
            config,
            call_store: Some(store),
        })
    }

    /// Build state backed by an in-process store
    pub fn with_memory_store(config: ServerConfig) -> (Arc<Self>, MemoryCallStore) {
        let store = MemoryCallStore::new();
        let state = Self::with_call_store(config, Arc::new(store.clone()));
        (state, store)
    }
}

fn build_supabase_store(config: &ServerConfig) -> Option<Arc<dyn CallStore>> {
    let Some((url, key)) = config.supabase_credentials() else {
        warn!("Supabase credentials not configured; call records cannot be stored");
        return None;
    };

    match SupabaseCallStore::new(
        url,
        key,
        &config.calls_table,
        Duration::from_secs(config.store_timeout_seconds),
    ) {
        Ok(store) => {
            info!(
                endpoint = %store.endpoint(),
                "Supabase call store initialized"
            );
            Some(Arc::new(store))
        }
        Err(e) => {
            warn!("Failed to initialize Supabase call store: {}", e);
            None
        }
    }
}
