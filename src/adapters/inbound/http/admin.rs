use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use super::state::AppState;
use crate::application::use_cases::{SaveOutcome, SaveSettingsUseCase};
use crate::editor;
use crate::embed::domain::{AssetLocation, WidgetSettings};
use crate::embed::services::listing_links::FIND_BOATS_PATH;

#[derive(Debug, Serialize)]
struct ConfiguredLibrary {
    script_url: String,
    style_url: String,
}

#[derive(Debug, Serialize)]
struct SettingsView {
    settings: WidgetSettings,
    /// The asset URLs the current domain/version resolve to, unsuffixed.
    library: ConfiguredLibrary,
    boat_finder_page: &'static str,
}

#[derive(Debug, Serialize)]
struct RejectedSave {
    errors: Vec<String>,
}

/// Handler for `GET /admin/boat-finder`.
///
/// Returns the current settings plus the resolved library URLs and the
/// find-boats page path, mirroring what an administrator needs to verify a
/// configuration at a glance.
pub async fn get_settings(state: web::Data<AppState>) -> impl Responder {
    match state.settings_store.load() {
        Ok(settings) => {
            let assets = AssetLocation::resolve(
                &settings.boat_finder_domain,
                &settings.boat_finder_version,
            );
            HttpResponse::Ok().json(SettingsView {
                settings,
                library: ConfiguredLibrary {
                    script_url: assets.script_url,
                    style_url: assets.style_url,
                },
                boat_finder_page: FIND_BOATS_PATH,
            })
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error loading settings: {}", e)),
    }
}

/// Handler for `PUT /admin/boat-finder`.
///
/// Validates the submitted record (required fields, then one reachability
/// probe per asset file) and persists it. A rejected save returns 422 with
/// one message per failing check and leaves the prior record untouched.
pub async fn put_settings(
    state: web::Data<AppState>,
    payload: web::Json<WidgetSettings>,
) -> impl Responder {
    let use_case =
        SaveSettingsUseCase::new(state.settings_store.as_ref(), state.asset_probe.as_ref());

    match use_case.execute(payload.into_inner()).await {
        Ok(SaveOutcome::Saved) => HttpResponse::Ok().json(serde_json::json!({
            "status": "saved"
        })),
        Ok(SaveOutcome::Rejected(errors)) => {
            HttpResponse::UnprocessableEntity().json(RejectedSave { errors })
        }
        Err(e) => HttpResponse::ServiceUnavailable()
            .body(format!("Error saving settings: {}", e)),
    }
}

/// Handler for `GET /admin/boat-finder/editor`: the toolbar button
/// descriptor and default shortcode for the rich-text editor integration.
pub async fn editor_config() -> impl Responder {
    HttpResponse::Ok().json(editor::editor_config())
}
