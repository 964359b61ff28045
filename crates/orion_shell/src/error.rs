//! Error type of the Orion shell.

use std::path::PathBuf;

use orion_types::error::OrionError;
use orion_vfs::VfsError;
use thiserror::Error;

/// Errors that can occur while setting up or running the shell
#[derive(Debug, Error)]
pub enum ShellError {
	/// Resource could not be read
	#[error(transparent)]
	Resource(#[from] VfsError),

	/// Texture or frame error
	#[error(transparent)]
	Graphics(#[from] OrionError),

	/// Image decoding or encoding error
	#[error(transparent)]
	ImageError(#[from] image::ImageError),

	/// Frame manifest is not valid JSON
	#[error("Invalid frame manifest {}: {source}", path.display())]
	Manifest {
		/// Manifest path
		path: PathBuf,
		/// Parse error
		#[source]
		source: serde_json::Error,
	},

	/// Font data was rejected by the window backend
	#[error("Cannot load font: {0}")]
	Font(String),

	/// Window size does not fit the requested canvas
	#[error("Invalid window size {width}×{height}")]
	InvalidWindowSize {
		/// Requested width
		width: u32,
		/// Requested height
		height: u32,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
