/// The actor a render is performed for.
///
/// Access control itself belongs to the host; the embed only needs to know
/// whether this actor may see the widget at all. A denied viewer silently
/// gets empty output rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer {
    pub can_view_embed: bool,
}

impl Viewer {
    pub fn permitted() -> Self {
        Self {
            can_view_embed: true,
        }
    }

    pub fn denied() -> Self {
        Self {
            can_view_embed: false,
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::permitted()
    }
}
