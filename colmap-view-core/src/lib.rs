//! Data access for a COLMAP reconstruction viewer.
//!
//! This crate provides the file-side half of the viewer backend:
//! - Even sampling of a sorted item list with bounded random jitter
//! - Image directory listing, sampling and file lookup
//! - Access to the text files of a COLMAP export
//!
//! HTTP concerns live in the server crate.

/// Even sampling with bounded jitter.
pub mod sampler;

/// Image directory listing and sampling.
pub mod gallery;

/// COLMAP text export access.
pub mod colmap;

/// Crate error type.
pub mod error;

/// I/O utilities (file reading, directory listing, path helpers).
pub mod io;

pub use error::CoreError;
pub use gallery::{ImageGallery, ImageSample};
pub use colmap::{ColmapExport, ColmapFile};
