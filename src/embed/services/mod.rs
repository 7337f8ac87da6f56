/// Stateless embed services: parameter resolution, shortcode expansion,
/// mount markup rendering and listing-link helpers.
pub mod listing_links;
pub mod markup;
pub mod parameter_resolver;
pub mod shortcode;

pub use parameter_resolver::{Paged, ParameterResolver, QueryFilters};
pub use shortcode::{expand, ExpandedText, RenderedEmbed, SHORTCODE_MARKER};
