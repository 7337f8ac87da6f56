use std::sync::Arc;

use crate::ports::outbound::{AssetProbe, SettingsStore, TermSource};

/// Shared collaborators handed to every HTTP handler.
///
/// Handlers construct use cases per request from these trait objects, so
/// the HTTP layer stays independent of the concrete adapters wired up in
/// `main`.
#[derive(Clone)]
pub struct AppState {
    pub settings_store: Arc<dyn SettingsStore>,
    pub asset_probe: Arc<dyn AssetProbe>,
    pub term_source: Arc<dyn TermSource>,
}

impl AppState {
    pub fn new(
        settings_store: Arc<dyn SettingsStore>,
        asset_probe: Arc<dyn AssetProbe>,
        term_source: Arc<dyn TermSource>,
    ) -> Self {
        Self {
            settings_store,
            asset_probe,
            term_source,
        }
    }
}
