use serde::Serialize;

/// The resolved set of named options passed to the widget mount markup.
///
/// Computed fresh on every render, never cached by this module. All values
/// are already stringly-typed because their only consumer is a set of HTML
/// `data-*` attributes; the three booleans are rendered as `true`/`false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmbedParameters {
    /// Whether the widget paginates by infinite scroll.
    pub paged: bool,
    pub boat_type: String,
    pub boat_brand: String,
    pub show_id: String,
    pub max_length: String,
    pub max_price: String,
    pub show_color: String,
    pub modal_sponsor_tagline: String,
    pub modal_sponsor_image: String,
    pub modal_sponsor_link: String,
    pub rows_between_sponsor_cards: String,
    pub sponsor_card_link: String,
    pub sponsor_card_image: String,
    pub city_location: String,
    pub show_booth_info: bool,
    pub show_exhibitor_info: bool,
}

impl EmbedParameters {
    /// The parameters as `data-*` attribute name/value pairs, in the order
    /// they appear on the container element.
    pub fn data_attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-paged", self.paged.to_string()),
            ("data-boat-type", self.boat_type.clone()),
            ("data-boat-brand", self.boat_brand.clone()),
            ("data-show-id", self.show_id.clone()),
            ("data-max-length", self.max_length.clone()),
            ("data-max-price", self.max_price.clone()),
            ("data-show-color", self.show_color.clone()),
            ("data-modal-sponsor-tagline", self.modal_sponsor_tagline.clone()),
            ("data-modal-sponsor-image", self.modal_sponsor_image.clone()),
            ("data-modal-sponsor-link", self.modal_sponsor_link.clone()),
            (
                "data-rows-between-sponsor-cards",
                self.rows_between_sponsor_cards.clone(),
            ),
            ("data-sponsor-card-link", self.sponsor_card_link.clone()),
            ("data-sponsor-card-image", self.sponsor_card_image.clone()),
            ("data-city-location", self.city_location.clone()),
            ("data-show-booth-info", self.show_booth_info.to_string()),
            ("data-show-exhibitor-info", self.show_exhibitor_info.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_empty() {
        let params = EmbedParameters::default();
        assert!(!params.paged);
        assert!(params.boat_type.is_empty());
        assert!(params.boat_brand.is_empty());
        assert!(params.city_location.is_empty());
        assert!(!params.show_booth_info);
    }

    #[test]
    fn test_data_attributes_cover_every_option() {
        let params = EmbedParameters::default();
        let attributes = params.data_attributes();
        assert_eq!(attributes.len(), 16);
        assert!(attributes.iter().all(|(name, _)| name.starts_with("data-")));
    }

    #[test]
    fn test_data_attributes_render_booleans() {
        let params = EmbedParameters {
            paged: true,
            show_booth_info: true,
            ..EmbedParameters::default()
        };
        let attributes = params.data_attributes();
        assert!(attributes.contains(&("data-paged", "true".to_string())));
        assert!(attributes.contains(&("data-show-booth-info", "true".to_string())));
        assert!(attributes.contains(&("data-show-exhibitor-info", "false".to_string())));
    }
}
