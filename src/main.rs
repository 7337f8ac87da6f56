use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use boat_finder_embed::adapters::inbound::http::{self, AppState};
use boat_finder_embed::adapters::outbound::network::HttpAssetProbe;
use boat_finder_embed::adapters::outbound::storage::FileSettingsStore;
use boat_finder_embed::adapters::outbound::terms::StaticTermSource;
use boat_finder_embed::cli::Args;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse_args();

    let asset_probe = HttpAssetProbe::new().map_err(std::io::Error::other)?;
    let state = AppState::new(
        Arc::new(FileSettingsStore::new(args.settings.clone())),
        Arc::new(asset_probe),
        // The service itself carries no content context; term-driven embeds
        // come in through the library API.
        Arc::new(StaticTermSource::default()),
    );

    info!(
        "Boat Finder embed server running at http://{}:{}",
        args.host, args.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(http::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await
}
