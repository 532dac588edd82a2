use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use log::debug;

/// Reads a whole UTF-8 text file into a `String`.
///
/// Line endings are kept as-is.
pub(crate) fn read_text_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all regular files in a directory whose extension is one of `extensions`.
///
/// - Extensions are given without the leading dot and compared exactly
///   (`"jpg"` does not match `photo.Jpg`)
/// - Returns file names only (no paths), in directory order
/// - Names that are not valid UTF-8 are skipped
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extensions: &[&str]) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if !path.is_file() {
			continue;
		}
		let matches = path
			.extension()
			.and_then(OsStr::to_str)
			.is_some_and(|ext| extensions.contains(&ext));
		if !matches {
			continue;
		}
		match path.file_name().and_then(OsStr::to_str) {
			Some(name) => files.push(name.to_owned()),
			None => debug!("Skipping non UTF-8 file name: {}", path.display()),
		}
	}

	Ok(files)
}

/// Returns `true` if `name` is a single, plain path component
/// (no separators, not `.` or `..`, not empty).
pub(crate) fn is_plain_file_name(name: &str) -> bool {
	let mut components = Path::new(name).components();
	matches!(
		(components.next(), components.next()),
		(Some(std::path::Component::Normal(c)), None) if c == OsStr::new(name)
	)
}
