use std::env;
use std::io;
use std::path::PathBuf;

use actix_web::{App, HttpServer, middleware, web};
use log::info;

use crate::config::ServerConfig;
use crate::routes::AppState;

mod config;
mod error;
mod routes;

/// Main entry point for the server.
///
/// Reads the configuration (YAML file from the first argument or
/// `COLMAP_VIEW_CONFIG`, then `COLMAP_VIEW_*` overrides), and serves the
/// COLMAP export, the images and the model over HTTP.
///
/// # Notes
/// - Log level defaults to `info`; use `RUST_LOG` to change it.
/// - Paths are not checked at startup, `/health` reports what is missing.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config_path = env::args_os().nth(1).map(PathBuf::from);
	let config = ServerConfig::load(config_path.as_deref()).map_err(io::Error::other)?;

	info!("Starting server at http://{}:{}", config.host, config.port);
	info!("COLMAP: {}", config.colmap_dir.display());
	info!("Images: {}", config.images_dir.display());
	info!("Model: {}", config.model_path.display());

	let bind_address = (config.host.clone(), config.port);
	let state = web::Data::new(AppState::new(config));

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(routes::cors(&state.config))
			.app_data(state.clone())
			.configure(routes::configure)
	})
		.bind(bind_address)?
		.run()
		.await
}
