// Application state (AppState)

use crate::core::config::Config;
use crate::store::Store;
use std::sync::Arc;

/// Shared application state
///
/// The store's pool is the only shared resource; handlers never hold locks.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
