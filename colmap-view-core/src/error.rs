use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for sampling, listing and file lookup failures.
#[derive(Debug, Error)]
pub enum CoreError {
	/// The sampler was handed an empty sequence.
	#[error("no items available")]
	NoItems,
	#[error("No images found in directory")]
	NoImages,
	#[error("Images directory not found at {}", .0.display())]
	DirectoryNotFound(PathBuf),
	#[error("{name} not found at {}", .path.display())]
	FileNotFound { name: String, path: PathBuf },
	#[error("Image {0} not found")]
	ImageNotFound(String),
	/// The requested name is not a single plain path component.
	#[error("Invalid file name: {0}")]
	InvalidFileName(String),
	#[error(transparent)]
	Io(#[from] io::Error),
}

impl CoreError {
	/// Returns `true` for every variant that means "the thing asked for is not there".
	pub fn is_not_found(&self) -> bool {
		matches!(
			self,
			CoreError::NoItems
				| CoreError::NoImages
				| CoreError::DirectoryNotFound(_)
				| CoreError::FileNotFound { .. }
				| CoreError::ImageNotFound(_)
		)
	}
}
