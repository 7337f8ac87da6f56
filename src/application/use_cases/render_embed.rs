use log::warn;

use crate::embed::domain::{select_filter_term, AssetLocation, Viewer, WidgetSettings};
use crate::embed::services::markup;
use crate::embed::services::{expand, ExpandedText, Paged, ParameterResolver, QueryFilters, RenderedEmbed};
use crate::ports::outbound::{SettingsStore, TermSource};
use crate::shared::error::EmbedError;
use crate::shared::Result;

/// Cache tag of the persisted settings record; every embed render depends
/// on it.
pub const SETTINGS_CACHE_TAG: &str = "settings:boat_finder_embed";

/// RenderEmbedUseCase - produces widget mount markup for every embed path.
///
/// Orchestrates the settings store, the term source, parameter resolution
/// and markup rendering. Page renders never fail: an unreadable settings
/// store degrades to the documented defaults, because the worst acceptable
/// outcome of any render is a missing widget, never a broken page. Only the
/// block path reports errors, and its caller (the shortcode expander)
/// isolates them per occurrence.
pub struct RenderEmbedUseCase<'a> {
    settings_store: &'a dyn SettingsStore,
    term_source: &'a dyn TermSource,
}

impl<'a> RenderEmbedUseCase<'a> {
    pub fn new(settings_store: &'a dyn SettingsStore, term_source: &'a dyn TermSource) -> Self {
        Self {
            settings_store,
            term_source,
        }
    }

    /// Renders the query-driven find-boats page.
    ///
    /// Only the request filters feed the embed parameters; the stored
    /// settings contribute nothing here beyond the asset location.
    pub fn render_query_page(&self, filters: &QueryFilters) -> RenderedEmbed {
        let settings = self.load_settings_or_default();
        let params = ParameterResolver::query_driven(filters);
        let html = markup::render(&params, &self.render_assets(&settings));
        RenderedEmbed::new(html, vec![SETTINGS_CACHE_TAG.to_string()])
    }

    /// Renders the settings-driven direct page; `paged` follows the stored
    /// `infinite_scroll` flag.
    pub fn render_direct_page(&self) -> RenderedEmbed {
        let settings = self.load_settings_or_default();
        let params = ParameterResolver::settings_driven(&settings, None, Paged::FromSettings);
        let html = markup::render(&params, &self.render_assets(&settings));
        RenderedEmbed::new(html, vec![SETTINGS_CACHE_TAG.to_string()])
    }

    /// Renders the embed block for the current term context.
    ///
    /// A viewer without access gets empty markup, which is not an error.
    ///
    /// # Errors
    /// Returns `EmbedError::RenderError` when the block cannot be built,
    /// e.g. the settings record exists but cannot be read.
    pub fn render_block(&self, viewer: &Viewer) -> Result<RenderedEmbed> {
        let settings = self.settings_store.load().map_err(|e| EmbedError::RenderError {
            details: e.to_string(),
        })?;

        let terms = self.term_source.related_terms();
        let term = select_filter_term(&terms);

        let mut cache_tags = vec![SETTINGS_CACHE_TAG.to_string()];
        if let Some(term) = term {
            cache_tags.extend(term.cache_tags.iter().cloned());
        }

        if !viewer.can_view_embed {
            return Ok(RenderedEmbed::hidden(cache_tags));
        }

        let params = ParameterResolver::settings_driven(&settings, term, Paged::Always);
        let html = markup::render(&params, &self.render_assets(&settings));
        Ok(RenderedEmbed::new(html, cache_tags))
    }

    /// Expands every shortcode occurrence in a rich-text body.
    ///
    /// Each occurrence renders the block independently; a failing occurrence
    /// is logged and left as literal marker text while the rest of the body
    /// is still processed.
    pub fn expand_content(&self, text: &str, viewer: &Viewer) -> ExpandedText {
        expand(text, || self.render_block(viewer))
    }

    fn load_settings_or_default(&self) -> WidgetSettings {
        match self.settings_store.load() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("falling back to default settings: {}", e);
                WidgetSettings::default()
            }
        }
    }

    fn render_assets(&self, settings: &WidgetSettings) -> AssetLocation {
        AssetLocation::resolve(&settings.boat_finder_domain, &settings.boat_finder_version)
            .with_cache_buster()
    }
}
