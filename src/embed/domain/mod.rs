/// Domain model for the Boat Finder embed.
///
/// Plain data types with no I/O: persisted settings, derived asset
/// locations, resolved embed parameters, taxonomy filter terms and the
/// rendering actor.
pub mod assets;
pub mod parameters;
pub mod settings;
pub mod term;
pub mod viewer;

pub use assets::{AssetLocation, ContentKind};
pub use parameters::EmbedParameters;
pub use settings::WidgetSettings;
pub use term::{select_filter_term, FilterTerm, TermBundle};
pub use viewer::Viewer;
