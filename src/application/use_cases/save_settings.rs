use crate::embed::domain::{AssetLocation, ContentKind, WidgetSettings};
use crate::ports::outbound::{AssetProbe, SettingsStore};
use crate::shared::error::EmbedError;
use crate::shared::Result;

/// Outcome of a settings-save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record was validated and persisted.
    Saved,
    /// Validation failed; the prior configuration remains in effect.
    /// Each entry is a field-level message suitable for the admin form.
    Rejected(Vec<String>),
}

/// SaveSettingsUseCase - validates and persists the settings record.
///
/// The domain/version pair must resolve to two reachable asset URLs before
/// a save is accepted. Both files are probed against their unsuffixed URLs
/// (the cache-busting token belongs to the render lifecycle, not to
/// validation) and every failing probe produces its own message, so an
/// administrator sees all problems at once.
pub struct SaveSettingsUseCase<'a> {
    settings_store: &'a dyn SettingsStore,
    asset_probe: &'a dyn AssetProbe,
}

impl<'a> SaveSettingsUseCase<'a> {
    pub fn new(settings_store: &'a dyn SettingsStore, asset_probe: &'a dyn AssetProbe) -> Self {
        Self {
            settings_store,
            asset_probe,
        }
    }

    /// Validates the submitted settings and persists them when acceptable.
    ///
    /// # Errors
    /// Returns an error only when persisting an accepted record fails;
    /// validation problems are reported through `SaveOutcome::Rejected`.
    pub async fn execute(&self, settings: WidgetSettings) -> Result<SaveOutcome> {
        if let Err(e) = settings.validate() {
            return Ok(SaveOutcome::Rejected(vec![e.to_string()]));
        }

        let assets = AssetLocation::resolve(
            &settings.boat_finder_domain,
            &settings.boat_finder_version,
        );

        let mut failures: Vec<String> = Vec::new();
        for (url, kind) in [
            (&assets.script_url, ContentKind::Script),
            (&assets.style_url, ContentKind::Style),
        ] {
            if !self.asset_probe.check(url, kind).await {
                failures.push(
                    EmbedError::AssetUnreachable {
                        kind: kind.label().to_string(),
                        url: url.clone(),
                    }
                    .to_string(),
                );
            }
        }

        if !failures.is_empty() {
            return Ok(SaveOutcome::Rejected(failures));
        }

        self.settings_store.save(&settings)?;
        Ok(SaveOutcome::Saved)
    }
}
