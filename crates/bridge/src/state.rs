//! Application state for dependency injection.

use std::sync::Arc;

use crate::clients::DiscordApi;
use crate::config::BridgeConfig;
use crate::repository::DataStore;
use crate::settings_cache::SettingsCache;
use crate::signature::SignatureVerifier;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub discord: Arc<dyn DiscordApi>,
    pub store: Arc<dyn DataStore>,
    pub settings: Arc<SettingsCache>,
    pub verifier: Arc<SignatureVerifier>,
    pub config: Arc<BridgeConfig>,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        discord: Arc<dyn DiscordApi>,
        store: Arc<dyn DataStore>,
        verifier: SignatureVerifier,
        config: BridgeConfig,
    ) -> Self {
        Self {
            discord,
            store,
            settings: Arc::new(SettingsCache::new()),
            verifier: Arc::new(verifier),
            config: Arc::new(config),
        }
    }
}
