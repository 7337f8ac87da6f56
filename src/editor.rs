//! Rich-text editor integration.
//!
//! The editor framework itself lives in the host; this module only supplies
//! the pieces it consumes: a toolbar button descriptor, the default
//! shortcode the button's command inserts, and the insertion itself.

use serde::Serialize;

use crate::embed::services::SHORTCODE_MARKER;

/// Descriptor of the toolbar button that inserts the embed shortcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditorButton {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The one button this module contributes.
pub const EMBED_BUTTON: EditorButton = EditorButton {
    id: "boat_finder_embed",
    label: "Embed Boat Finder App",
    icon: "assets/editor/boat-finder.png",
};

/// Configuration payload handed to the editor at initialization.
pub fn editor_config() -> serde_json::Value {
    serde_json::json!({
        "default_shortcode": SHORTCODE_MARKER,
        "buttons": [EMBED_BUTTON],
    })
}

/// Inserts the shortcode marker at the cursor position.
///
/// `cursor` is a byte offset into `text`; it is clamped to the text length
/// and moved back to the nearest character boundary, so a cursor inside a
/// multi-byte character can never split it.
pub fn insert_shortcode(text: &str, cursor: usize) -> String {
    let mut at = cursor.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    format!("{}{}{}", &text[..at], SHORTCODE_MARKER, &text[at..])
}
