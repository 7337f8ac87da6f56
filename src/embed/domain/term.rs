/// Taxonomy bundles that can narrow the widget's displayed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermBundle {
    /// Terms classifying boats by type; override the `boat_type` parameter.
    BoatTypes,
    /// Terms classifying boats by brand; override the `boat_brand` parameter.
    Brands,
}

/// Read-only view of a taxonomy term carrying a boat finder filter value.
///
/// Terms live in the host's content graph; this module only ever reads the
/// narrow slice it needs: the bundle, the scalar filter value, whether the
/// current actor may view the term, and the cache tags to propagate into
/// render output.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTerm {
    pub bundle: TermBundle,
    /// The scalar filter field value; `None` when the field is absent.
    pub filter_value: Option<String>,
    /// Whether the current actor may view this term.
    pub viewable: bool,
    /// Cache tags of the backing entity, merged into render cache metadata.
    pub cache_tags: Vec<String>,
}

impl FilterTerm {
    pub fn new(bundle: TermBundle, filter_value: impl Into<String>) -> Self {
        Self {
            bundle,
            filter_value: Some(filter_value.into()),
            viewable: true,
            cache_tags: Vec::new(),
        }
    }

    /// The filter value, if this term may contribute one.
    ///
    /// A term contributes nothing when the actor may not view it or when its
    /// filter field is empty or absent; callers then fall back to the
    /// next-lower-precedence source.
    pub fn usable_value(&self) -> Option<&str> {
        if !self.viewable {
            return None;
        }
        match self.filter_value.as_deref() {
            Some(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// Selects the term that drives the embed from a set of related terms.
///
/// Terms are consulted in stored order and the first usable one wins. The
/// stored-order tie-break makes the choice deterministic when a content row
/// is related to several terms of the same bundle.
pub fn select_filter_term(terms: &[FilterTerm]) -> Option<&FilterTerm> {
    terms.iter().find(|term| term.usable_value().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_value_present() {
        let term = FilterTerm::new(TermBundle::Brands, "Centurion");
        assert_eq!(term.usable_value(), Some("Centurion"));
    }

    #[test]
    fn test_usable_value_empty_field() {
        let term = FilterTerm {
            filter_value: Some(String::new()),
            ..FilterTerm::new(TermBundle::BoatTypes, "")
        };
        assert_eq!(term.usable_value(), None);
    }

    #[test]
    fn test_usable_value_absent_field() {
        let term = FilterTerm {
            filter_value: None,
            ..FilterTerm::new(TermBundle::BoatTypes, "unused")
        };
        assert_eq!(term.usable_value(), None);
    }

    #[test]
    fn test_usable_value_not_viewable() {
        let term = FilterTerm {
            viewable: false,
            ..FilterTerm::new(TermBundle::Brands, "Centurion")
        };
        assert_eq!(term.usable_value(), None);
    }

    #[test]
    fn test_select_filter_term_first_in_stored_order_wins() {
        let terms = vec![
            FilterTerm::new(TermBundle::Brands, "Centurion"),
            FilterTerm::new(TermBundle::Brands, "Malibu"),
        ];
        let selected = select_filter_term(&terms).unwrap();
        assert_eq!(selected.usable_value(), Some("Centurion"));
    }

    #[test]
    fn test_select_filter_term_skips_unusable_terms() {
        let terms = vec![
            FilterTerm {
                viewable: false,
                ..FilterTerm::new(TermBundle::Brands, "Hidden")
            },
            FilterTerm::new(TermBundle::BoatTypes, "Deck Boats"),
        ];
        let selected = select_filter_term(&terms).unwrap();
        assert_eq!(selected.bundle, TermBundle::BoatTypes);
    }

    #[test]
    fn test_select_filter_term_none_usable() {
        let terms = vec![FilterTerm {
            filter_value: None,
            ..FilterTerm::new(TermBundle::Brands, "")
        }];
        assert!(select_filter_term(&terms).is_none());
    }
}
