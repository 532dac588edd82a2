use actix_cors::Cors;
use actix_files::NamedFile;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get, web};
use colmap_view_core::{ColmapExport, ColmapFile, ImageGallery, ImageSample};
use serde::{Deserialize, Serialize};

use crate::config::{ANY_ORIGIN, ServerConfig};
use crate::error::ApiError;

/// Number of images listed when `limit` is not given.
const DEFAULT_LIMIT: usize = 5;

/// Read-only state shared by every worker.
pub struct AppState {
	pub config: ServerConfig,
	gallery: ImageGallery,
	colmap: ColmapExport,
}

impl AppState {
	pub fn new(config: ServerConfig) -> Self {
		Self {
			gallery: ImageGallery::new(config.images_dir.clone()),
			colmap: ColmapExport::new(config.colmap_dir.clone()),
			config,
		}
	}
}

/// Query parameters for `/api/images/list`
#[derive(Deserialize)]
struct ListParams {
	limit: Option<usize>,
}

#[derive(Serialize)]
struct Endpoints {
	colmap_cameras: &'static str,
	colmap_images: &'static str,
	colmap_points3d: &'static str,
	image: &'static str,
	model: &'static str,
	image_list: &'static str,
	health: &'static str,
}

#[derive(Serialize)]
struct Index {
	message: &'static str,
	endpoints: Endpoints,
}

#[derive(Serialize)]
struct HealthPaths {
	colmap_dir: String,
	images_dir: String,
	model_path: String,
	colmap_exists: bool,
	images_exists: bool,
	model_exists: bool,
}

#[derive(Serialize)]
struct Health {
	status: &'static str,
	paths: HealthPaths,
}

#[get("/")]
async fn index() -> impl Responder {
	HttpResponse::Ok().json(Index {
		message: "2D-3D Projection Backend API",
		endpoints: Endpoints {
			colmap_cameras: "/api/colmap/cameras",
			colmap_images: "/api/colmap/images",
			colmap_points3d: "/api/colmap/points3d",
			image: "/api/images/{filename}",
			model: "/api/model",
			image_list: "/api/images/list",
			health: "/health",
		},
	})
}

fn colmap_text(data: &AppState, file: ColmapFile) -> Result<HttpResponse, ApiError> {
	let content = data.colmap.read(file)?;
	Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(content))
}

#[get("/api/colmap/cameras")]
async fn get_cameras(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	colmap_text(&data, ColmapFile::Cameras)
}

#[get("/api/colmap/images")]
async fn get_images_txt(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	colmap_text(&data, ColmapFile::Images)
}

#[get("/api/colmap/points3d")]
async fn get_points3d(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	colmap_text(&data, ColmapFile::Points3D)
}

/// HTTP GET endpoint `/api/images/list`
///
/// Returns `{count, total, images}` for up to `limit` images spread across
/// the sorted directory listing.
#[get("/api/images/list")]
async fn list_images(
	data: web::Data<AppState>,
	query: web::Query<ListParams>,
) -> Result<web::Json<ImageSample>, ApiError> {
	let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
	Ok(web::Json(data.gallery.sample(limit)?))
}

#[get("/api/images/{filename}")]
async fn get_image(data: web::Data<AppState>, path: web::Path<String>) -> Result<NamedFile, ApiError> {
	let image_path = data.gallery.resolve(&path)?;
	Ok(NamedFile::open(image_path)?)
}

#[get("/api/model")]
async fn get_model(data: web::Data<AppState>) -> Result<NamedFile, ApiError> {
	let model_path = &data.config.model_path;
	if !model_path.is_file() {
		return Err(ApiError::ModelNotFound(model_path.display().to_string()));
	}
	Ok(NamedFile::open(model_path)?)
}

#[get("/health")]
async fn health(data: web::Data<AppState>) -> impl Responder {
	let model_path = &data.config.model_path;
	HttpResponse::Ok().json(Health {
		status: "ok",
		paths: HealthPaths {
			colmap_dir: data.colmap.dir().display().to_string(),
			images_dir: data.gallery.dir().display().to_string(),
			model_path: model_path.display().to_string(),
			colmap_exists: data.colmap.exists(),
			images_exists: data.gallery.exists(),
			model_exists: model_path.exists(),
		},
	})
}

/// Registers every route.
///
/// `/api/images/list` must come before `/api/images/{filename}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(index)
		.service(get_cameras)
		.service(get_images_txt)
		.service(get_points3d)
		.service(list_images)
		.service(get_image)
		.service(get_model)
		.service(health);
}

/// CORS policy: configured origins, credentials, any method and header.
///
/// An `"*"` entry allows every origin.
pub fn cors(config: &ServerConfig) -> Cors {
	let cors = if config.allowed_origins.iter().any(|origin| origin == ANY_ORIGIN) {
		Cors::default().allow_any_origin()
	} else {
		config
			.allowed_origins
			.iter()
			.fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
	};
	cors.allow_any_method()
		.allow_any_header()
		.supports_credentials()
}
