use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::io;
use crate::sampler;

/// File extensions (without the dot) recognised as images.
///
/// Membership is case-sensitive: only all-lowercase and all-uppercase forms are listed.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// Result of sampling an image directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ImageSample {
	/// Number of images returned.
	pub count: usize,
	/// Number of images available in the directory.
	pub total: usize,
	/// Sampled file names, in index order.
	pub images: Vec<String>,
}

/// A directory of source images.
#[derive(Clone, Debug)]
pub struct ImageGallery {
	dir: PathBuf,
}

impl ImageGallery {
	pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn exists(&self) -> bool {
		self.dir.exists()
	}

	/// Lists image file names in the directory, sorted lexicographically.
	///
	/// # Errors
	/// - [`CoreError::DirectoryNotFound`] if the directory does not exist.
	/// - [`CoreError::Io`] if the listing fails.
	pub fn list(&self) -> Result<Vec<String>, CoreError> {
		if !self.dir.exists() {
			return Err(CoreError::DirectoryNotFound(self.dir.clone()));
		}
		let mut images = io::list_files(&self.dir, &IMAGE_EXTENSIONS)?;
		images.sort();
		Ok(images)
	}

	/// Samples up to `limit` images spread across the sorted listing.
	///
	/// # Errors
	/// Same as [`ImageGallery::list`], plus [`CoreError::NoImages`] for an empty directory.
	pub fn sample(&self, limit: usize) -> Result<ImageSample, CoreError> {
		debug!("Checking images directory: {}", self.dir.display());
		let images = self.list()?;
		debug!("Found {} images", images.len());

		if images.is_empty() {
			return Err(CoreError::NoImages);
		}

		let sampled = sampler::sample_evenly(&images, limit)?;
		debug!("Sampled {} distributed images: {:?}", sampled.len(), sampled);

		Ok(ImageSample {
			count: sampled.len(),
			total: images.len(),
			images: sampled,
		})
	}

	/// Resolves a single image file name to its path inside the directory.
	///
	/// The name is not checked against [`IMAGE_EXTENSIONS`].
	///
	/// # Errors
	/// - [`CoreError::InvalidFileName`] if `filename` is not a plain file name.
	/// - [`CoreError::ImageNotFound`] if no such regular file exists.
	pub fn resolve(&self, filename: &str) -> Result<PathBuf, CoreError> {
		if !io::is_plain_file_name(filename) {
			return Err(CoreError::InvalidFileName(filename.to_owned()));
		}
		let path = self.dir.join(filename);
		if !path.is_file() {
			return Err(CoreError::ImageNotFound(filename.to_owned()));
		}
		Ok(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::{TempDir, tempdir};

	fn gallery_with(names: &[&str]) -> (TempDir, ImageGallery) {
		let dir = tempdir().unwrap();
		for name in names {
			fs::write(dir.path().join(name), b"img").unwrap();
		}
		let gallery = ImageGallery::new(dir.path());
		(dir, gallery)
	}

	#[test]
	fn list_is_sorted_and_filtered() {
		let (_dir, gallery) = gallery_with(&[
			"frame_010.png",
			"frame_002.JPG",
			"frame_001.jpeg",
			"notes.txt",
			"frame_003.Png",
		]);
		assert_eq!(
			gallery.list().unwrap(),
			vec!["frame_001.jpeg", "frame_002.JPG", "frame_010.png"]
		);
	}

	#[test]
	fn missing_directory() {
		let dir = tempdir().unwrap();
		let gallery = ImageGallery::new(dir.path().join("missing"));
		assert!(!gallery.exists());
		assert!(matches!(gallery.list(), Err(CoreError::DirectoryNotFound(_))));
		assert!(matches!(gallery.sample(5), Err(CoreError::DirectoryNotFound(_))));
	}

	#[test]
	fn empty_directory_has_no_images() {
		let (_dir, gallery) = gallery_with(&["readme.md"]);
		assert!(matches!(gallery.sample(5), Err(CoreError::NoImages)));
	}

	#[test]
	fn sample_reports_count_and_total() {
		let names: Vec<String> = (0..10).map(|i| format!("img_{i:02}.jpg")).collect();
		let refs: Vec<&str> = names.iter().map(String::as_str).collect();
		let (_dir, gallery) = gallery_with(&refs);

		let sample = gallery.sample(5).unwrap();
		assert_eq!(sample.count, 5);
		assert_eq!(sample.total, 10);
		assert_eq!(
			sample.images,
			vec!["img_00.jpg", "img_02.jpg", "img_04.jpg", "img_06.jpg", "img_08.jpg"]
		);

		let all = gallery.sample(50).unwrap();
		assert_eq!(all.count, 10);
		assert_eq!(all.images, names);

		let none = gallery.sample(0).unwrap();
		assert_eq!(none.count, 0);
		assert_eq!(none.total, 10);
	}

	#[test]
	fn resolve_checks_name_and_existence() {
		let (dir, gallery) = gallery_with(&["a.jpg"]);
		assert_eq!(gallery.resolve("a.jpg").unwrap(), dir.path().join("a.jpg"));
		assert!(matches!(gallery.resolve("b.jpg"), Err(CoreError::ImageNotFound(_))));
		assert!(matches!(gallery.resolve("../a.jpg"), Err(CoreError::InvalidFileName(_))));
	}

	#[test]
	fn resolve_ignores_directories() {
		let (dir, gallery) = gallery_with(&["a.jpg"]);
		fs::create_dir(dir.path().join("sub.jpg")).unwrap();
		assert!(matches!(gallery.resolve("sub.jpg"), Err(CoreError::ImageNotFound(_))));
		assert_eq!(gallery.list().unwrap(), vec!["a.jpg"]);
	}
}
