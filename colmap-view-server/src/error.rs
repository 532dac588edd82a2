use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use colmap_view_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the HTTP handlers.
///
/// Rendered as `{"detail": "..."}` with a status derived from the variant.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Core(#[from] CoreError),
	#[error("Model not found at {0}")]
	ModelNotFound(String),
	#[error("failed to open file: {0}")]
	Open(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody {
	detail: String,
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Core(CoreError::InvalidFileName(_)) => StatusCode::BAD_REQUEST,
			ApiError::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
			ApiError::ModelNotFound(_) => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorBody {
			detail: self.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn status_codes() {
		assert_eq!(ApiError::from(CoreError::NoImages).status_code(), StatusCode::NOT_FOUND);
		assert_eq!(
			ApiError::from(CoreError::DirectoryNotFound(PathBuf::from("/x"))).status_code(),
			StatusCode::NOT_FOUND
		);
		assert_eq!(
			ApiError::from(CoreError::InvalidFileName("..".into())).status_code(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(
			ApiError::from(CoreError::Io(std::io::Error::other("disk"))).status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
		assert_eq!(
			ApiError::ModelNotFound("/m.glb".into()).status_code(),
			StatusCode::NOT_FOUND
		);
	}
}
