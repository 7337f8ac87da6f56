use std::collections::HashMap;

use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use super::state::AppState;
use crate::application::use_cases::RenderEmbedUseCase;
use crate::embed::domain::Viewer;
use crate::embed::services::QueryFilters;

/// Response header carrying the cache tags a render depended on, for the
/// surrounding cache layer to key invalidation on.
const CACHE_TAGS_HEADER: &str = "X-Cache-Tags";

#[derive(Debug, Deserialize)]
pub struct ContentBody {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ExpandedContent {
    pub body: String,
    pub cache_tags: Vec<String>,
}

/// Handler for `GET /find-boats-by-brand`.
///
/// Reads the `boat-type`, `boat-brand` and `analyticsCitylocation` query
/// parameters and renders the query-driven embed. The response is publicly
/// cacheable with no expiry; URL-keyed caches vary it per distinct
/// parameter combination because the query string is part of the cache key.
pub async fn find_boats_by_brand(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let filters = QueryFilters::from_map(&query);
    let use_case =
        RenderEmbedUseCase::new(state.settings_store.as_ref(), state.term_source.as_ref());
    let rendered = use_case.render_query_page(&filters);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=31536000"))
        .insert_header((CACHE_TAGS_HEADER, rendered.cache_tags.join(" ")))
        .body(page_shell("Find Boats", &rendered.html))
}

/// Handler for `GET /boat-finder`: the settings-driven direct page.
/// No special cache context beyond the default page cache.
pub async fn boat_finder_page(state: web::Data<AppState>) -> impl Responder {
    let use_case =
        RenderEmbedUseCase::new(state.settings_store.as_ref(), state.term_source.as_ref());
    let rendered = use_case.render_direct_page();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((CACHE_TAGS_HEADER, rendered.cache_tags.join(" ")))
        .body(page_shell("Boat Finder", &rendered.html))
}

/// Handler for `POST /render/content`.
///
/// Expands every `[boat_finder_app]` occurrence in the submitted rich-text
/// body and returns the processed text together with the cache tags the
/// caller must merge into its own response cache metadata.
pub async fn render_content(
    state: web::Data<AppState>,
    payload: web::Json<ContentBody>,
) -> impl Responder {
    let use_case =
        RenderEmbedUseCase::new(state.settings_store.as_ref(), state.term_source.as_ref());
    let expanded = use_case.expand_content(&payload.body, &Viewer::permitted());

    HttpResponse::Ok()
        .insert_header((CACHE_TAGS_HEADER, expanded.cache_tags.join(" ")))
        .json(ExpandedContent {
            body: expanded.text,
            cache_tags: expanded.cache_tags,
        })
}

/// Wraps embed markup in a minimal page document.
fn page_shell(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n<title>{title}</title>\n",
            "</head>\n<body>\n<header id=\"header\"></header>\n{body}\n</body>\n</html>\n"
        ),
        title = title,
        body = body,
    )
}
