//! Inbound HTTP adapter.
//!
//! Routes the embed's external surface onto the application use cases:
//!
//! * `GET /find-boats-by-brand` - query-driven embed page.
//! * `GET /boat-finder` - settings-driven embed page.
//! * `POST /render/content` - shortcode expansion for rich-text bodies.
//! * `GET /admin/boat-finder` / `PUT /admin/boat-finder` - settings record.
//! * `GET /admin/boat-finder/editor` - editor toolbar integration config.
//! * `GET /assets/boat-finder-embed.js` - scroll behavior script.

pub mod admin;
pub mod assets;
pub mod embed_pages;
pub mod state;

use actix_web::web;

pub use state::AppState;

/// Registers every route this service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/find-boats-by-brand",
        web::get().to(embed_pages::find_boats_by_brand),
    )
    .route("/boat-finder", web::get().to(embed_pages::boat_finder_page))
    .route("/render/content", web::post().to(embed_pages::render_content))
    .service(
        web::scope("/admin/boat-finder")
            .route("", web::get().to(admin::get_settings))
            .route("", web::put().to(admin::put_settings))
            .route("/editor", web::get().to(admin::editor_config)),
    )
    .route(
        "/assets/boat-finder-embed.js",
        web::get().to(assets::behavior_script),
    );
}
