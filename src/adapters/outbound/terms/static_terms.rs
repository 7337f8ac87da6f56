use crate::embed::domain::FilterTerm;
use crate::ports::outbound::TermSource;

/// StaticTermSource adapter - an in-memory term list in stored order.
///
/// The real content graph lives in the host system; this adapter carries
/// whatever term slice the host resolved for the current context. Render
/// paths without any term context use the default, empty source.
#[derive(Debug, Clone, Default)]
pub struct StaticTermSource {
    terms: Vec<FilterTerm>,
}

impl StaticTermSource {
    pub fn new(terms: Vec<FilterTerm>) -> Self {
        Self { terms }
    }
}

impl TermSource for StaticTermSource {
    fn related_terms(&self) -> Vec<FilterTerm> {
        self.terms.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::domain::TermBundle;

    #[test]
    fn test_empty_source_returns_no_terms() {
        let source = StaticTermSource::default();
        assert!(source.related_terms().is_empty());
    }

    #[test]
    fn test_terms_keep_stored_order() {
        let source = StaticTermSource::new(vec![
            FilterTerm::new(TermBundle::Brands, "Centurion"),
            FilterTerm::new(TermBundle::Brands, "Malibu"),
        ]);
        let terms = source.related_terms();
        assert_eq!(terms[0].filter_value.as_deref(), Some("Centurion"));
        assert_eq!(terms[1].filter_value.as_deref(), Some("Malibu"));
    }
}
