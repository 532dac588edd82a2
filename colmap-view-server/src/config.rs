use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use actix_web::http::Uri;
use colmap_view_core::io::normalize_folder;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a YAML configuration file.
pub const CONFIG_ENV: &str = "COLMAP_VIEW_CONFIG";

const HOST_ENV: &str = "COLMAP_VIEW_HOST";
const PORT_ENV: &str = "COLMAP_VIEW_PORT";
const COLMAP_DIR_ENV: &str = "COLMAP_VIEW_COLMAP_DIR";
const IMAGES_DIR_ENV: &str = "COLMAP_VIEW_IMAGES_DIR";
const MODEL_PATH_ENV: &str = "COLMAP_VIEW_MODEL_PATH";

/// `allowed_origins` entry that allows every origin.
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {}: {source}", .path.display())]
	Read { path: PathBuf, source: std::io::Error },
	#[error("failed to parse config file {}: {source}", .path.display())]
	Parse { path: PathBuf, source: serde_yaml::Error },
	#[error("invalid value for {name}: {value}")]
	InvalidValue { name: &'static str, value: String },
}

/// Server settings: where the data lives and where to listen.
///
/// Every field has a default, so an empty YAML document is a valid configuration.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	/// Folder holding `cameras.txt`, `images.txt` and optionally `points3D.txt`.
	pub colmap_dir: PathBuf,
	/// Folder holding the source images.
	pub images_dir: PathBuf,
	/// 3D model asset (usually `.glb`).
	pub model_path: PathBuf,
	/// Origins allowed by CORS, or `"*"` for any.
	pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "localhost".to_owned(),
			port: 8000,
			colmap_dir: PathBuf::from("./data/colmap"),
			images_dir: PathBuf::from("./data/images"),
			model_path: PathBuf::from("./data/model.glb"),
			allowed_origins: vec![
				"http://localhost:3000".to_owned(),
				"http://localhost:5173".to_owned(),
			],
		}
	}
}

impl ServerConfig {
	/// Parses a YAML document.
	pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
		// An empty document deserializes to unit, not to a map.
		if yaml.trim().is_empty() {
			return Ok(Self::default());
		}
		serde_yaml::from_str(yaml)
	}

	/// Reads a YAML configuration file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_owned(),
			source,
		})?;
		Self::from_yaml_str(&contents).map_err(|source| ConfigError::Parse {
			path: path.to_owned(),
			source,
		})
	}

	/// Builds the startup configuration.
	///
	/// # Behavior
	/// - Starts from `file` if given, else from `COLMAP_VIEW_CONFIG` if set, else defaults.
	/// - Applies the `COLMAP_VIEW_*` environment overrides on top.
	/// - Validates the result.
	pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
		let file = file.map(Path::to_owned).or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
		let mut config = match file {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		config.apply_overrides(|name| env::var(name).ok())?;
		config.validate()?;
		Ok(config)
	}

	/// Checks that every CORS origin is `"*"` or parses as a URI.
	///
	/// # Errors
	/// Returns [`ConfigError::InvalidValue`] naming the first bad origin.
	pub fn validate(&self) -> Result<(), ConfigError> {
		for origin in &self.allowed_origins {
			if origin != ANY_ORIGIN && origin.parse::<Uri>().is_err() {
				return Err(ConfigError::InvalidValue {
					name: "allowed_origins",
					value: origin.clone(),
				});
			}
		}
		Ok(())
	}

	/// Applies overrides looked up by variable name.
	pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(host) = lookup(HOST_ENV) {
			self.host = host;
		}
		if let Some(port) = lookup(PORT_ENV) {
			self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
				name: PORT_ENV,
				value: port,
			})?;
		}
		if let Some(dir) = lookup(COLMAP_DIR_ENV) {
			self.colmap_dir = normalize_folder(&dir);
		}
		if let Some(dir) = lookup(IMAGES_DIR_ENV) {
			self.images_dir = normalize_folder(&dir);
		}
		if let Some(path) = lookup(MODEL_PATH_ENV) {
			self.model_path = PathBuf::from(path);
		}
		Ok(())
	}
}
