use crate::embed::domain::WidgetSettings;
use crate::shared::Result;

/// SettingsStore port for the persisted widget settings record.
///
/// The store holds exactly one record. It is read by every render and
/// written only by the admin save path; write serialization is the backing
/// store's concern, not this module's.
pub trait SettingsStore: Send + Sync {
    /// Loads the current settings.
    ///
    /// A store with no record yet returns the documented defaults rather
    /// than an error.
    ///
    /// # Errors
    /// Returns an error when the backing store exists but cannot be read or
    /// parsed.
    fn load(&self) -> Result<WidgetSettings>;

    /// Persists a new settings record, replacing the previous one.
    fn save(&self, settings: &WidgetSettings) -> Result<()>;
}
