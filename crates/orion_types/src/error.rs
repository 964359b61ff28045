//! Error types for frames, textures and time strings.

use thiserror::Error;

use crate::geometry::IntRect;

/// Errors that can occur in the core graphics and system types
#[derive(Debug, Error)]
pub enum OrionError {
	/// Frame index outside the stored frames
	#[error("Frame index {index} out of range (total frames: {len})")]
	FrameIndexOutOfRange {
		/// Index that was requested
		index: usize,
		/// Number of frames available
		len: usize,
	},

	/// A texture is already registered under the key
	#[error("Texture key already in use: {0}")]
	TextureKeyTaken(String),

	/// No texture is registered under the key
	#[error("Texture key not found: {0}")]
	TextureKeyMissing(String),

	/// Requested image area does not overlap the image
	#[error("Area {area} lies outside the {width}×{height} image")]
	InvalidArea {
		/// Requested area
		area: IntRect,
		/// Image width in pixels
		width: u32,
		/// Image height in pixels
		height: u32,
	},

	/// Time format string contains an unsupported specifier
	#[error("Invalid time format: {0:?}")]
	InvalidTimeFormat(String),

	/// Formatted time string exceeds the buffer limit
	#[error("Time string too long: {length} bytes (limit {limit})")]
	TimeStringTooLong {
		/// Length of the formatted string
		length: usize,
		/// Maximum allowed length
		limit: usize,
	},

	/// Image decoding error
	#[error(transparent)]
	ImageError(#[from] image::ImageError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl OrionError {
	/// Creates a frame index error.
	pub fn out_of_range(index: usize, len: usize) -> Self {
		Self::FrameIndexOutOfRange {
			index,
			len,
		}
	}
}
