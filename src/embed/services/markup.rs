use crate::embed::domain::{AssetLocation, EmbedParameters};

/// Path the header-hiding scroll behavior script is served from.
pub const BEHAVIOR_SCRIPT_PATH: &str = "/assets/boat-finder-embed.js";

/// Renders the widget mount markup.
///
/// Emits the stylesheet link, the container element carrying every embed
/// parameter as a `data-*` attribute, the hosted component script and the
/// local scroll-behavior script. The hosted application takes over from the
/// container element at load time; nothing beyond these tags is part of the
/// contract.
pub fn render(params: &EmbedParameters, assets: &AssetLocation) -> String {
    let mut attributes = String::new();
    for (name, value) in params.data_attributes() {
        attributes.push_str(&format!(" {}=\"{}\"", name, escape_attribute(&value)));
    }

    format!(
        concat!(
            "<link rel=\"stylesheet\" href=\"{style}\" crossorigin=\"anonymous\">\n",
            "<div class=\"boat-finder-app\"{attributes}></div>\n",
            "<script type=\"module\" src=\"{script}\" crossorigin=\"anonymous\"></script>\n",
            "<script src=\"{behavior}\" defer></script>"
        ),
        style = escape_attribute(&assets.style_url),
        attributes = attributes,
        script = escape_attribute(&assets.script_url),
        behavior = BEHAVIOR_SCRIPT_PATH,
    )
}

/// Escapes a string for use inside a double-quoted HTML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> AssetLocation {
        AssetLocation::resolve("https://assets.example.com", "1.0.0")
    }

    #[test]
    fn test_render_emits_container_with_data_attributes() {
        let params = EmbedParameters {
            paged: true,
            boat_type: "Deck Boats".to_string(),
            ..EmbedParameters::default()
        };
        let html = render(&params, &assets());
        assert!(html.contains("class=\"boat-finder-app\""));
        assert!(html.contains("data-paged=\"true\""));
        assert!(html.contains("data-boat-type=\"Deck Boats\""));
    }

    #[test]
    fn test_render_declares_both_asset_references() {
        let html = render(&EmbedParameters::default(), &assets());
        assert!(html.contains(
            "href=\"https://assets.example.com/boat-finder-component-1.0.0.css\""
        ));
        assert!(html.contains(
            "src=\"https://assets.example.com/boat-finder-component-1.0.0.js\""
        ));
        assert!(html.contains("type=\"module\""));
        assert!(html.contains("crossorigin=\"anonymous\""));
    }

    #[test]
    fn test_render_attaches_behavior_script() {
        let html = render(&EmbedParameters::default(), &assets());
        assert!(html.contains(BEHAVIOR_SCRIPT_PATH));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let params = EmbedParameters {
            boat_brand: "\"><script>alert(1)</script>".to_string(),
            ..EmbedParameters::default()
        };
        let html = render(&params, &assets());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("a&b"), "a&amp;b");
        assert_eq!(escape_attribute("plain"), "plain");
        assert_eq!(escape_attribute("\"quoted\""), "&quot;quoted&quot;");
    }
}
