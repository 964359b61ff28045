//! JSON description of a sprite sheet's frames.
//!
//! ```json
//! {
//!   "display_rect": { "left": 0, "top": 0, "width": 106, "height": 96 },
//!   "frames": [
//!     { "x": 0, "y": 0, "w": 106, "h": 96 },
//!     { "x": 107, "y": 0, "w": 108, "h": 96 }
//!   ],
//!   "groups": []
//! }
//! ```
//!
//! Single frames are inserted before groups.

use orion_types::{
	geometry::IntRect,
	graphics::{Animation, Frame, FrameGroup, Texturable},
};
use serde::{Deserialize, Serialize};

/// Frames of a sprite sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameManifest {
	/// Display rectangle, the whole texture if missing
	#[serde(default)]
	pub display_rect: Option<IntRect>,
	/// Individual frames
	#[serde(default)]
	pub frames: Vec<Frame>,
	/// Frame grids
	#[serde(default)]
	pub groups: Vec<FrameGroup>,
}

impl FrameManifest {
	/// The Wymon sprite sheet layout.
	pub fn wymon() -> Self {
		Self {
			display_rect: Some(IntRect::new(0, 0, 106, 96)),
			frames: vec![Frame::new(0, 0, 106, 96), Frame::new(107, 0, 108, 96)],
			groups: Vec::new(),
		}
	}

	/// Parses a manifest.
	///
	/// # Errors
	///
	/// Returns the JSON error for malformed input.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Returns the display rectangle to use, the empty rectangle meaning the whole texture.
	pub fn display_rect(&self) -> IntRect {
		self.display_rect.unwrap_or_default()
	}

	/// Inserts all frames into `animation`, applying the display rectangle first.
	///
	/// Returns the number of inserted frames.
	pub fn apply(&self, animation: &mut Animation) -> usize {
		animation.apply_display_rect(self.display_rect());
		let before = animation.frame_count();
		for frame in &self.frames {
			animation.insert(*frame, None);
		}
		for group in &self.groups {
			animation.insert_group(group, None);
		}
		animation.frame_count() - before
	}
}
