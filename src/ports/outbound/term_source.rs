use crate::embed::domain::FilterTerm;

/// TermSource port - read-only view into the host's taxonomy graph.
///
/// The block and shortcode render paths consult the terms related to the
/// current content context. Implementations return terms in stored order;
/// which term actually drives the embed is decided by
/// `embed::domain::select_filter_term`.
pub trait TermSource: Send + Sync {
    /// The filter terms related to the current render context, in stored
    /// order. An empty list means the embed falls back to stored settings.
    fn related_terms(&self) -> Vec<FilterTerm>;
}
