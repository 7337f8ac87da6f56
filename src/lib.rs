//! boat-finder-embed - embeds the hosted Boat Finder application
//!
//! This library mounts a third-party, externally hosted single-page
//! application into site pages: it resolves versioned asset references,
//! validates them at configuration-save time, merges embed parameters from
//! their three possible sources and expands a shortcode marker inside
//! rich-text bodies.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`embed::domain`): settings, asset locations, embed
//!   parameters and taxonomy filter terms
//! - **Domain Services** (`embed::services`): parameter resolution,
//!   shortcode expansion and mount markup rendering
//! - **Application Layer** (`application`): the render and save use cases
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP endpoints, the reachability probe and
//!   the settings file store
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use boat_finder_embed::prelude::*;
//!
//! # fn main() {
//! let settings_store = FileSettingsStore::new("boat-finder-settings.yml");
//! let term_source = StaticTermSource::default();
//!
//! let use_case = RenderEmbedUseCase::new(&settings_store, &term_source);
//! let expanded = use_case.expand_content(
//!     "Plan your visit. [boat_finder_app]",
//!     &Viewer::permitted(),
//! );
//! println!("{}", expanded.text);
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod editor;
pub mod embed;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::HttpAssetProbe;
    pub use crate::adapters::outbound::storage::FileSettingsStore;
    pub use crate::adapters::outbound::terms::StaticTermSource;
    pub use crate::application::use_cases::{
        RenderEmbedUseCase, SaveOutcome, SaveSettingsUseCase, SETTINGS_CACHE_TAG,
    };
    pub use crate::embed::domain::{
        select_filter_term, AssetLocation, ContentKind, EmbedParameters, FilterTerm, TermBundle,
        Viewer, WidgetSettings,
    };
    pub use crate::embed::services::{
        expand, ExpandedText, Paged, ParameterResolver, QueryFilters, RenderedEmbed,
        SHORTCODE_MARKER,
    };
    pub use crate::ports::outbound::{AssetProbe, SettingsStore, TermSource};
    pub use crate::shared::Result;
}
