use actix_web::{HttpResponse, Responder};

/// The header-hiding scroll behavior, shipped with the crate and referenced
/// by every embed render.
const BEHAVIOR_SCRIPT: &str = include_str!("../../../../static/boat-finder-embed.js");

/// Handler for `GET /assets/boat-finder-embed.js`.
pub async fn behavior_script() -> impl Responder {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(BEHAVIOR_SCRIPT)
}
