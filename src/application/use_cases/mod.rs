pub mod render_embed;
pub mod save_settings;

pub use render_embed::{RenderEmbedUseCase, SETTINGS_CACHE_TAG};
pub use save_settings::{SaveOutcome, SaveSettingsUseCase};
