use std::collections::HashMap;

use crate::embed::domain::{EmbedParameters, FilterTerm, TermBundle, WidgetSettings};

/// Query-string keys consumed by the find-boats-by-brand entry point.
const QUERY_BOAT_TYPE: &str = "boat-type";
const QUERY_BOAT_BRAND: &str = "boat-brand";
const QUERY_CITY_LOCATION: &str = "analyticsCitylocation";

/// How the `paged` flag is decided in settings-driven resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paged {
    /// Take the stored `infinite_scroll` setting (direct page path).
    FromSettings,
    /// Hard-coded true (block and shortcode paths).
    Always,
}

/// The filter values an incoming request may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilters {
    pub boat_type: String,
    pub boat_brand: String,
    pub city_location: String,
}

impl QueryFilters {
    /// Extracts the three recognized keys from a query-string map.
    /// Missing keys default to empty strings; unknown keys are ignored.
    pub fn from_map(params: &HashMap<String, String>) -> Self {
        let value = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            boat_type: value(QUERY_BOAT_TYPE),
            boat_brand: value(QUERY_BOAT_BRAND),
            city_location: value(QUERY_CITY_LOCATION),
        }
    }
}

/// ParameterResolver - merges the candidate sources of embed parameters.
///
/// Two resolution modes exist. Query-driven resolution reads only the
/// request filters and leaves every other option at its documented default.
/// Settings-driven resolution reads every option from the stored settings
/// and lets a usable filter term override the matching filter field.
/// Neither mode can fail: absent or malformed inputs degrade to defaults.
pub struct ParameterResolver;

impl ParameterResolver {
    /// Resolves parameters for the query-driven brand-lookup entry point.
    ///
    /// Only `boat-type`, `boat-brand` and `analyticsCitylocation` are taken
    /// from the request; `paged` is hard-coded true and all other options
    /// keep their defaults.
    pub fn query_driven(filters: &QueryFilters) -> EmbedParameters {
        EmbedParameters {
            paged: true,
            boat_type: filters.boat_type.clone(),
            boat_brand: filters.boat_brand.clone(),
            city_location: filters.city_location.clone(),
            ..EmbedParameters::default()
        }
    }

    /// Resolves parameters from stored settings, optionally overridden by a
    /// taxonomy filter term.
    ///
    /// A term overrides `boat_type` when its bundle is `boat_types` and
    /// `boat_brand` when its bundle is `brands`, but only while the term is
    /// viewable and its filter value is non-empty. Query parameters are
    /// never consulted in this mode.
    pub fn settings_driven(
        settings: &WidgetSettings,
        filter_term: Option<&FilterTerm>,
        paged: Paged,
    ) -> EmbedParameters {
        let mut boat_type = settings.boat_type.clone();
        let mut boat_brand = settings.boat_brand.clone();

        if let Some(term) = filter_term {
            if let Some(value) = term.usable_value() {
                match term.bundle {
                    TermBundle::BoatTypes => boat_type = value.to_string(),
                    TermBundle::Brands => boat_brand = value.to_string(),
                }
            }
        }

        EmbedParameters {
            paged: match paged {
                Paged::FromSettings => settings.infinite_scroll,
                Paged::Always => true,
            },
            boat_type,
            boat_brand,
            show_id: settings.show_id.clone(),
            max_length: settings.max_length.to_string(),
            max_price: settings.max_price.to_string(),
            show_color: settings.show_color.clone(),
            modal_sponsor_tagline: settings.modal_sponsor_tagline.clone(),
            modal_sponsor_image: settings.modal_sponsor_image.clone(),
            modal_sponsor_link: settings.modal_sponsor_link.clone(),
            rows_between_sponsor_cards: settings.rows_between_sponsor_cards.to_string(),
            sponsor_card_link: settings.sponsor_card_link.clone(),
            sponsor_card_image: settings.sponsor_card_image.clone(),
            city_location: settings.city_location.clone(),
            show_booth_info: settings.show_booth_info,
            show_exhibitor_info: settings.show_exhibitor_info,
        }
    }
}
