pub mod mock_asset_probe;
pub mod mock_settings_store;

pub use mock_asset_probe::MockAssetProbe;
pub use mock_settings_store::MockSettingsStore;
