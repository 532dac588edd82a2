use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::io;

/// Text files of a COLMAP export that can be served.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColmapFile {
	/// Intrinsics, one camera per line.
	Cameras,
	/// Per-image pose followed by its 2D points line.
	Images,
	/// Sparse point cloud. Optional in an export.
	Points3D,
}

impl ColmapFile {
	pub const ALL: [ColmapFile; 3] = [ColmapFile::Cameras, ColmapFile::Images, ColmapFile::Points3D];

	pub fn file_name(self) -> &'static str {
		match self {
			ColmapFile::Cameras => "cameras.txt",
			ColmapFile::Images => "images.txt",
			ColmapFile::Points3D => "points3D.txt",
		}
	}
}

impl fmt::Display for ColmapFile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.file_name())
	}
}

/// A directory holding a COLMAP text export.
#[derive(Clone, Debug)]
pub struct ColmapExport {
	dir: PathBuf,
}

impl ColmapExport {
	pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn exists(&self) -> bool {
		self.dir.exists()
	}

	pub fn path(&self, file: ColmapFile) -> PathBuf {
		self.dir.join(file.file_name())
	}

	/// Reads one of the export's text files.
	///
	/// # Errors
	/// - [`CoreError::FileNotFound`] if the file is missing.
	/// - [`CoreError::Io`] if it cannot be read as UTF-8 text.
	pub fn read(&self, file: ColmapFile) -> Result<String, CoreError> {
		let path = self.path(file);
		if !path.is_file() {
			return Err(CoreError::FileNotFound {
				name: file.file_name().to_owned(),
				path,
			});
		}
		Ok(io::read_text_file(path)?)
	}
}
