//! Animation frames and frame groups.
//!
//! A [`Frame`] names one sub-image of a sprite sheet. A [`FrameGroup`] is a
//! shorthand for a grid of equally sized frames inside a section of the sheet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{IntRect, Vector2i};

/// Single animation frame: a rectangle on the source texture.
///
/// # Examples
///
/// ```
/// use orion_types::graphics::Frame;
///
/// let frame = Frame::new(107, 0, 108, 96);
/// assert_eq!(frame.size().x, 108);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
	/// Left offset on the texture
	pub x: i32,
	/// Top offset on the texture
	pub y: i32,
	/// Frame width
	pub w: i32,
	/// Frame height
	pub h: i32,
}

impl Frame {
	/// Creates a frame from its position and size.
	pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Creates a frame from a position and a size vector.
	pub fn from_vectors(position: Vector2i, size: Vector2i) -> Self {
		Self::new(position.x, position.y, size.x, size.y)
	}

	/// Returns the position on the texture.
	#[inline]
	pub fn position(&self) -> Vector2i {
		Vector2i::new(self.x, self.y)
	}

	/// Returns the size.
	#[inline]
	pub fn size(&self) -> Vector2i {
		Vector2i::new(self.w, self.h)
	}

	/// Returns the frame as a texture rectangle.
	#[inline]
	pub fn to_rect(&self) -> IntRect {
		IntRect::new(self.x, self.y, self.w, self.h)
	}
}

impl From<IntRect> for Frame {
	fn from(rect: IntRect) -> Self {
		Self::new(rect.left, rect.top, rect.width, rect.height)
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Frame({}, {}; {}×{})", self.x, self.y, self.w, self.h)
	}
}

/// Group of same-sized frames laid out in a grid.
///
/// The section `(x, y, sw, sh)` is cut into `sw / w` columns and `sh / h`
/// rows; partial cells at the right and bottom edges are dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameGroup {
	/// Left offset of the section
	pub x: i32,
	/// Top offset of the section
	pub y: i32,
	/// Section width
	pub sw: i32,
	/// Section height
	pub sh: i32,
	/// Width of each frame
	pub w: i32,
	/// Height of each frame
	pub h: i32,
}

impl FrameGroup {
	/// Creates a frame group.
	pub const fn new(x: i32, y: i32, sw: i32, sh: i32, w: i32, h: i32) -> Self {
		Self {
			x,
			y,
			sw,
			sh,
			w,
			h,
		}
	}

	/// Creates a frame group from section position, section size and frame size.
	pub fn from_vectors(position: Vector2i, section: Vector2i, frame_size: Vector2i) -> Self {
		Self::new(position.x, position.y, section.x, section.y, frame_size.x, frame_size.y)
	}

	/// Number of frame columns.
	pub fn columns(&self) -> usize {
		if self.w <= 0 || self.sw <= 0 {
			0
		} else {
			(self.sw / self.w) as usize
		}
	}

	/// Number of frame rows.
	pub fn rows(&self) -> usize {
		if self.h <= 0 || self.sh <= 0 {
			0
		} else {
			(self.sh / self.h) as usize
		}
	}

	/// Number of frames the group expands to.
	pub fn len(&self) -> usize {
		self.rows() * self.columns()
	}

	/// Returns `true` if the group expands to no frames.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates over the frames in row-major order.
	pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
		let cols = self.columns();
		(0..self.len()).map(move |i| {
			let row = (i / cols) as i32;
			let col = (i % cols) as i32;
			Frame::new(self.x + col * self.w, self.y + row * self.h, self.w, self.h)
		})
	}
}

impl fmt::Display for FrameGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"FrameGroup({}, {}; {}×{} of {}×{})",
			self.x, self.y, self.sw, self.sh, self.w, self.h
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_group_expands_row_major() {
		let group = FrameGroup::new(0, 0, 64, 32, 32, 16);
		let frames: Vec<_> = group.frames().collect();
		assert_eq!(
			frames,
			vec![
				Frame::new(0, 0, 32, 16),
				Frame::new(32, 0, 32, 16),
				Frame::new(0, 16, 32, 16),
				Frame::new(32, 16, 32, 16),
			]
		);
	}

	#[test]
	fn test_group_with_offset_and_partial_cells() {
		let group = FrameGroup::new(10, 5, 70, 20, 32, 16);
		assert_eq!(group.columns(), 2);
		assert_eq!(group.rows(), 1);
		let frames: Vec<_> = group.frames().collect();
		assert_eq!(frames, vec![Frame::new(10, 5, 32, 16), Frame::new(42, 5, 32, 16)]);
	}

	#[test]
	fn test_group_zero_frame_size_is_empty() {
		let group = FrameGroup::new(0, 0, 64, 64, 0, 16);
		assert!(group.is_empty());
		assert_eq!(group.frames().count(), 0);
	}
}
