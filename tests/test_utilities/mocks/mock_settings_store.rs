use std::sync::Mutex;

use anyhow::anyhow;
use boat_finder_embed::prelude::*;

/// In-memory SettingsStore for tests.
///
/// Records every save so tests can assert whether (and with what) the
/// store was written.
pub struct MockSettingsStore {
    current: Mutex<WidgetSettings>,
    saves: Mutex<Vec<WidgetSettings>>,
    fail_load: bool,
}

impl MockSettingsStore {
    pub fn new(settings: WidgetSettings) -> Self {
        Self {
            current: Mutex::new(settings),
            saves: Mutex::new(Vec::new()),
            fail_load: false,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(WidgetSettings::default())
    }

    pub fn with_load_failure() -> Self {
        Self {
            current: Mutex::new(WidgetSettings::default()),
            saves: Mutex::new(Vec::new()),
            fail_load: true,
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<WidgetSettings> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl SettingsStore for MockSettingsStore {
    fn load(&self) -> Result<WidgetSettings> {
        if self.fail_load {
            return Err(anyhow!("settings backend unavailable"));
        }
        Ok(self.current.lock().unwrap().clone())
    }

    fn save(&self, settings: &WidgetSettings) -> Result<()> {
        *self.current.lock().unwrap() = settings.clone();
        self.saves.lock().unwrap().push(settings.clone());
        Ok(())
    }
}
