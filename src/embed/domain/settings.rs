use serde::{Deserialize, Serialize};

use crate::shared::error::EmbedError;
use crate::shared::Result;

/// Domain the hosted component files are served from when nothing has been
/// configured yet.
pub const DEFAULT_DOMAIN: &str = "https://live-boatfinderreactapp.appa.pantheon.site";

/// Component version assumed until an administrator configures one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Persisted Boat Finder settings, mutated only through the admin endpoint.
///
/// A single record of this shape drives every embed render. The domain and
/// version select the hosted script/stylesheet pair; the remaining fields are
/// default filter and display options passed to the widget mount markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Domain where the Boat Finder JavaScript and CSS files are hosted.
    pub boat_finder_domain: String,
    /// Version of the Boat Finder JavaScript and CSS files.
    pub boat_finder_version: String,
    /// Show boats from the specified show ID.
    pub show_id: String,
    /// When true the widget loads more boats as the user scrolls down.
    /// When false a Load More button is displayed instead.
    pub infinite_scroll: bool,
    /// Boats that exceed this length (in feet) are not included in results.
    pub max_length: u32,
    /// Boats that exceed this price are not included in results.
    pub max_price: u64,
    /// When provided, restricts the widget to boats of this type.
    pub boat_type: String,
    /// When provided, restricts the widget to boats of this brand.
    pub boat_brand: String,
    /// Hex color value applied to filters, prices, icons and descriptions.
    pub show_color: String,
    pub modal_sponsor_tagline: String,
    pub modal_sponsor_image: String,
    pub modal_sponsor_link: String,
    /// Number of result rows rendered between two sponsor cards.
    pub rows_between_sponsor_cards: u32,
    pub sponsor_card_link: String,
    pub sponsor_card_image: String,
    /// cityLocation value pushed to the analytics data layer.
    pub city_location: String,
    /// When true the widget shows the show booth card info.
    pub show_booth_info: bool,
    /// When true the widget shows the booth exhibitor info.
    pub show_exhibitor_info: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            boat_finder_domain: DEFAULT_DOMAIN.to_string(),
            boat_finder_version: DEFAULT_VERSION.to_string(),
            show_id: "dbcom".to_string(),
            infinite_scroll: false,
            max_length: 260,
            max_price: 1_600_000,
            boat_type: String::new(),
            boat_brand: String::new(),
            show_color: "#adadad".to_string(),
            modal_sponsor_tagline: String::new(),
            modal_sponsor_image: String::new(),
            modal_sponsor_link: String::new(),
            rows_between_sponsor_cards: 10,
            sponsor_card_link: String::new(),
            sponsor_card_image: String::new(),
            city_location: String::new(),
            show_booth_info: false,
            show_exhibitor_info: false,
        }
    }
}

impl WidgetSettings {
    /// Validates the fields the admin form marks as required.
    ///
    /// Only presence is checked here; whether the domain/version pair points
    /// at real files is the reachability probe's job at save time.
    ///
    /// # Errors
    /// Returns `EmbedError::InvalidSettings` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.boat_finder_domain.trim().is_empty() {
            return Err(EmbedError::InvalidSettings {
                field: "boat_finder_domain".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.boat_finder_version.trim().is_empty() {
            return Err(EmbedError::InvalidSettings {
                field: "boat_finder_version".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.show_id.trim().is_empty() {
            return Err(EmbedError::InvalidSettings {
                field: "show_id".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
