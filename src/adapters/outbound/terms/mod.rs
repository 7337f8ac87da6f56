pub mod static_terms;

pub use static_terms::StaticTermSource;
