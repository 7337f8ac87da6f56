use log::error;

use crate::shared::Result;

/// The literal marker replaced with embed markup inside rich-text bodies.
pub const SHORTCODE_MARKER: &str = "[boat_finder_app]";

/// Output of a single embed render.
///
/// `html` is empty when the viewer may not see the embed; `cache_tags`
/// names the cacheable dependencies (settings record, filter term) that
/// contributed to the markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedEmbed {
    pub html: String,
    pub cache_tags: Vec<String>,
}

impl RenderedEmbed {
    pub fn new(html: impl Into<String>, cache_tags: Vec<String>) -> Self {
        Self {
            html: html.into(),
            cache_tags,
        }
    }

    /// Empty output for a viewer without access; still cacheable.
    pub fn hidden(cache_tags: Vec<String>) -> Self {
        Self {
            html: String::new(),
            cache_tags,
        }
    }
}

/// A text body with shortcodes expanded, plus the accumulated cache tags of
/// every successfully rendered occurrence. Callers merge the tags into their
/// own response cache metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedText {
    pub text: String,
    pub cache_tags: Vec<String>,
}

/// Replaces every `[boat_finder_app]` occurrence in `text` with rendered
/// embed markup.
///
/// Occurrences are processed sequentially and independently: when
/// `render_one` fails, that occurrence is left as literal marker text, the
/// error is logged, and processing continues with the remaining
/// occurrences. A render returning empty markup (viewer lacks access)
/// replaces the occurrence with an empty string.
pub fn expand<F>(text: &str, mut render_one: F) -> ExpandedText
where
    F: FnMut() -> Result<RenderedEmbed>,
{
    let mut output = String::with_capacity(text.len());
    let mut cache_tags: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(position) = rest.find(SHORTCODE_MARKER) {
        output.push_str(&rest[..position]);
        match render_one() {
            Ok(rendered) => {
                output.push_str(&rendered.html);
                for tag in rendered.cache_tags {
                    if !cache_tags.contains(&tag) {
                        cache_tags.push(tag);
                    }
                }
            }
            Err(e) => {
                error!("Error processing embed: {}", e);
                output.push_str(SHORTCODE_MARKER);
            }
        }
        rest = &rest[position + SHORTCODE_MARKER.len()..];
    }
    output.push_str(rest);

    ExpandedText {
        text: output,
        cache_tags,
    }
}
