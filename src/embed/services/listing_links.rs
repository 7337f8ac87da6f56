use urlencoding::encode;

/// Route of the query-driven brand-lookup page.
pub const FIND_BOATS_PATH: &str = "/find-boats-by-brand";

/// Builds the URL of the find-boats page, carrying the given filters as
/// url-encoded query parameters. Empty filters are omitted entirely.
pub fn find_boats_by_brand_url(boat_type: &str, boat_brand: &str) -> String {
    let mut query: Vec<String> = Vec::new();
    if !boat_type.is_empty() {
        query.push(format!("boat-type={}", encode(boat_type)));
    }
    if !boat_brand.is_empty() {
        query.push(format!("boat-brand={}", encode(boat_brand)));
    }
    if query.is_empty() {
        FIND_BOATS_PATH.to_string()
    } else {
        format!("{}?{}", FIND_BOATS_PATH, query.join("&"))
    }
}

/// Appends a boat-filter icon link to a listing row.
///
/// Listing rows that carry both a type and a brand get a link to the
/// find-boats page filtered to that combination; rows missing either value
/// are returned unchanged.
pub fn append_filter_link(row_html: &str, boat_type: &str, boat_brand: &str) -> String {
    if boat_type.is_empty() || boat_brand.is_empty() {
        return row_html.to_string();
    }
    let url = find_boats_by_brand_url(boat_type, boat_brand);
    format!(
        "{}<a class='boat-filter' target='_blank' href='{}'><span class='boat-filter-icon'></span></a>",
        row_html, url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_both_filters() {
        let url = find_boats_by_brand_url("Deck Boats", "Centurion");
        assert_eq!(
            url,
            "/find-boats-by-brand?boat-type=Deck%20Boats&boat-brand=Centurion"
        );
    }

    #[test]
    fn test_url_with_single_filter() {
        assert_eq!(
            find_boats_by_brand_url("", "Centurion"),
            "/find-boats-by-brand?boat-brand=Centurion"
        );
    }

    #[test]
    fn test_url_without_filters() {
        assert_eq!(find_boats_by_brand_url("", ""), "/find-boats-by-brand");
    }

    #[test]
    fn test_append_filter_link() {
        let row = append_filter_link("<span>Centurion</span>", "Deck Boats", "Centurion");
        assert!(row.starts_with("<span>Centurion</span><a class='boat-filter'"));
        assert!(row.contains("boat-type=Deck%20Boats"));
        assert!(row.contains("boat-filter-icon"));
    }

    #[test]
    fn test_append_filter_link_skips_incomplete_rows() {
        assert_eq!(
            append_filter_link("<span>row</span>", "", "Centurion"),
            "<span>row</span>"
        );
        assert_eq!(
            append_filter_link("<span>row</span>", "Deck Boats", ""),
            "<span>row</span>"
        );
    }
}
