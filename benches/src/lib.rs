//! Benchmark helper utilities for orion
//!
//! This module provides synthetic sprite sheets and frame layouts for the
//! benchmarks. Frame positions are generated with a fixed linear congruential
//! sequence so every run measures the same workload.

use orion_types::{
	geometry::IntRect,
	graphics::{Color, Frame, FrameGroup, Texture, TextureHandle},
};

/// Frame group covering a sheet of `columns × rows` frames of `frame` size.
pub fn sheet_group(columns: i32, rows: i32, frame: (i32, i32)) -> FrameGroup {
	FrameGroup::new(0, 0, columns * frame.0, rows * frame.1, frame.0, frame.1)
}

/// Solid texture large enough for [`sheet_group`] with the same arguments.
pub fn sheet_texture(columns: i32, rows: i32, frame: (i32, i32)) -> TextureHandle {
	let width = (columns * frame.0).max(1) as u32;
	let height = (rows * frame.1).max(1) as u32;
	Texture::solid(width, height, Color::WHITE).into_handle()
}

/// `count` frames scattered over a `bounds` sized sheet, some of them
/// reaching past its edges.
pub fn scattered_frames(count: usize, bounds: IntRect) -> Vec<Frame> {
	let mut state = 0x2545_f491_u32;
	let mut next = move |limit: i32| {
		state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
		((state >> 8) % limit.max(1) as u32) as i32
	};

	(0..count)
		.map(|_| {
			let x = bounds.left + next(bounds.width);
			let y = bounds.top + next(bounds.height);
			Frame::new(x, y, 1 + next(bounds.width / 2), 1 + next(bounds.height / 2))
		})
		.collect()
}

/// Common sheet layouts: (columns, rows, frame size)
pub mod sheets {
	/// The Wymon sheet: two frames
	pub const WYMON: (i32, i32, (i32, i32)) = (2, 1, (106, 96));
	/// A walk cycle: 8 frames in one row
	pub const WALK_CYCLE: (i32, i32, (i32, i32)) = (8, 1, (64, 64));
	/// A large atlas: 32×32 tiles of 16×16
	pub const ATLAS: (i32, i32, (i32, i32)) = (32, 32, (16, 16));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sheet_group_counts() {
		let (columns, rows, frame) = sheets::WALK_CYCLE;
		let group = sheet_group(columns, rows, frame);
		assert_eq!(group.len(), 8);
		assert_eq!(sheet_texture(columns, rows, frame).borrow().size().x, 512);
	}

	#[test]
	fn test_scattered_frames_are_stable() {
		let bounds = IntRect::new(0, 0, 256, 128);
		let first = scattered_frames(16, bounds);
		assert_eq!(first, scattered_frames(16, bounds));
		assert_eq!(first.len(), 16);
		assert!(first.iter().all(|f| f.x >= 0 && f.x < 256 && f.w >= 1 && f.w <= 128));
	}
}
