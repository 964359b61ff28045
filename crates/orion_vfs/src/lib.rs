//! Read-only access to bundled resource files.
//!
//! Resources (background image, sprite sheet, font, window icon) live in one
//! directory and are addressed by paths relative to it:
//!
//! ```text
//! Resources/
//! ├── background.jpg
//! ├── icon.png
//! ├── NotoSerif-Regular.ttf
//! ├── wymon.png
//! └── wymon.json      optional frame manifest
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use orion_vfs::ResourceDir;
//!
//! let resources = ResourceDir::new("Resources");
//! let sheet = resources.read("wymon.png")?;
//! # Ok::<(), orion_vfs::VfsError>(())
//! ```

use std::{
	fs::File,
	io::{BufReader, Read},
	path::{Component, Path, PathBuf},
};

use log::debug;
use thiserror::Error;

/// Errors that can occur while accessing resources
#[derive(Debug, Error)]
pub enum VfsError {
	/// Resource does not exist
	#[error("Resource not found: {}", .0.display())]
	NotFound(PathBuf),

	/// Path leaves the resource directory
	#[error("Resource path escapes the resource directory: {}", .0.display())]
	OutsideRoot(PathBuf),

	/// IO error
	#[error("IO error on {}: {source}", path.display())]
	IOError {
		/// Path that failed
		path: PathBuf,
		/// Underlying error
		#[source]
		source: std::io::Error,
	},
}

impl VfsError {
	fn io(path: &Path, source: std::io::Error) -> Self {
		if source.kind() == std::io::ErrorKind::NotFound {
			Self::NotFound(path.to_path_buf())
		} else {
			Self::IOError {
				path: path.to_path_buf(),
				source,
			}
		}
	}
}

/// Directory of bundled resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDir {
	root: PathBuf,
}

impl ResourceDir {
	/// Creates a resource directory rooted at `root`.
	///
	/// The directory is not checked until a resource is accessed.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Returns the root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Resolves a relative resource path.
	///
	/// # Errors
	///
	/// Returns [`VfsError::OutsideRoot`] for absolute paths and paths with
	/// `..` components.
	pub fn path(&self, relative: impl AsRef<Path>) -> Result<PathBuf, VfsError> {
		let relative = relative.as_ref();
		let escapes = relative
			.components()
			.any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
		if escapes {
			return Err(VfsError::OutsideRoot(relative.to_path_buf()));
		}
		Ok(self.root.join(relative))
	}

	/// Returns `true` if the resource exists as a file.
	pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
		self.path(relative).is_ok_and(|p| p.is_file())
	}

	/// Reads a whole resource into memory.
	///
	/// # Errors
	///
	/// Returns [`VfsError::NotFound`] if the file is missing, or the IO error.
	pub fn read(&self, relative: impl AsRef<Path>) -> Result<Vec<u8>, VfsError> {
		let path = self.path(relative)?;
		let mut data = Vec::new();
		open_resolved(&path)?.read_to_end(&mut data).map_err(|e| VfsError::io(&path, e))?;
		debug!("Read {} bytes from {}", data.len(), path.display());
		Ok(data)
	}

	/// Reads a resource as UTF-8 text.
	///
	/// # Errors
	///
	/// See [`read`](Self::read); invalid UTF-8 is reported as an IO error.
	pub fn read_to_string(&self, relative: impl AsRef<Path>) -> Result<String, VfsError> {
		let path = self.path(relative)?;
		let mut text = String::new();
		open_resolved(&path)?.read_to_string(&mut text).map_err(|e| VfsError::io(&path, e))?;
		Ok(text)
	}

	/// Opens a resource for buffered reading.
	///
	/// # Errors
	///
	/// Returns [`VfsError::NotFound`] if the file is missing, or the IO error.
	pub fn open(&self, relative: impl AsRef<Path>) -> Result<BufReader<File>, VfsError> {
		open_resolved(&self.path(relative)?)
	}
}

fn open_resolved(path: &Path) -> Result<BufReader<File>, VfsError> {
	let file = File::open(path).map_err(|e| VfsError::io(path, e))?;
	Ok(BufReader::new(file))
}

impl Default for ResourceDir {
	fn default() -> Self {
		Self::new("Resources")
	}
}
