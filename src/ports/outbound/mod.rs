/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (settings storage, the asset host,
/// the content graph).
pub mod asset_probe;
pub mod settings_store;
pub mod term_source;

pub use asset_probe::AssetProbe;
pub use settings_store::SettingsStore;
pub use term_source::TermSource;
