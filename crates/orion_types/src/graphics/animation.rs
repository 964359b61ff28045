//! Sprite sheet animations.
//!
//! An [`Animation`] is a textured quad whose displayed area is taken from a
//! list of [`Frame`]s instead of a single rectangle. The frames live in a
//! [`FrameStore`](super::FrameStore) behind a [`SharedFrames`] handle:
//!
//! ```text
//! Animation ──┐
//!             ├──► SharedFrames ──► FrameStore { original, display }
//! clone() ────┘          ▲
//!                        └── FrameRegistry (weak)
//! ```
//!
//! Playback is a single index cycling through `[0, frame_count)`. Before the
//! first [`advance`](Animation::advance) no frame is selected and the quad
//! shows the display rectangle.
//!
//! # Examples
//!
//! ```
//! use orion_types::geometry::IntRect;
//! use orion_types::graphics::{Animation, Color, Frame, FrameRegistry, Texture};
//!
//! let mut registry = FrameRegistry::new();
//! let sheet = Texture::solid(215, 96, Color::WHITE).into_handle();
//! let mut wymon = Animation::with_texture_rect(&mut registry, sheet, IntRect::new(0, 0, 106, 96));
//! wymon.insert(Frame::new(0, 0, 106, 96), None);
//! wymon.insert(Frame::new(107, 0, 108, 96), None);
//!
//! assert_eq!(wymon.advance(), 0);
//! assert_eq!(wymon.advance(), 1);
//! assert_eq!(wymon.advance(), 0);
//! ```

use std::rc::Rc;

use crate::{
	error::OrionError,
	geometry::{FloatRect, IntRect, Vector2f, Vector2i},
};

use super::{
	Drawable, Frame, FrameGroup, FrameRegistry, RenderStates, RenderTarget, SharedFrames, Texturable, TextureHandle,
	TexturedQuad,
};

/// Playback index before the first advance.
const NOT_STARTED: usize = usize::MAX;

/// Textured quad cycling through sprite sheet frames.
///
/// Cloning aliases the frame storage: frames inserted through one clone are
/// visible to all of them, while texture, transform and playback index are
/// copied.
#[derive(Debug, Clone)]
pub struct Animation {
	quad: TexturedQuad,
	frames: SharedFrames,
	index: usize,
	maximum_size: Vector2f,
}

impl Animation {
	/// Creates an animation without texture and frames.
	pub fn new(registry: &mut FrameRegistry) -> Self {
		Self::from_storage(registry.create())
	}

	/// Creates an animation showing the whole texture until frames are added.
	pub fn with_texture(registry: &mut FrameRegistry, texture: TextureHandle) -> Self {
		let mut animation = Self::new(registry);
		animation.set_texture(texture, true);
		animation
	}

	/// Creates an animation with a texture and a display rectangle.
	pub fn with_texture_rect(registry: &mut FrameRegistry, texture: TextureHandle, rect: IntRect) -> Self {
		let mut animation = Self::new(registry);
		animation.set_texture(texture, false);
		animation.set_display_rect(rect);
		animation
	}

	/// Creates an animation playing the frames of an existing store.
	///
	/// The maximum frame size starts from the frames already stored.
	pub fn from_storage(frames: SharedFrames) -> Self {
		let mut maximum_size = Vector2f::default();
		for frame in frames.borrow().originals() {
			maximum_size.x = maximum_size.x.max(frame.w as f32);
			maximum_size.y = maximum_size.y.max(frame.h as f32);
		}

		Self {
			quad: TexturedQuad::new(),
			frames,
			index: NOT_STARTED,
			maximum_size,
		}
	}

	/// Appends a frame and returns its index.
	///
	/// The display frame is clipped by `rect`, or by the animation's display
	/// rectangle if `rect` is `None` or empty.
	pub fn insert(&mut self, frame: Frame, rect: Option<IntRect>) -> usize {
		let rect = self.effective_rect(rect);
		self.track_size(frame.size());
		self.frames.borrow_mut().push(frame, &rect)
	}

	/// Inserts a frame at `index`, shifting the following frames back.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] if `index` is greater
	/// than the frame count.
	pub fn insert_at(&mut self, frame: Frame, index: usize, rect: Option<IntRect>) -> Result<usize, OrionError> {
		let rect = self.effective_rect(rect);
		let index = self.frames.borrow_mut().insert_at(frame, index, &rect)?;
		self.track_size(frame.size());
		Ok(index)
	}

	/// Appends every frame of a group in row-major order.
	///
	/// Returns the index of the first inserted frame, which equals the
	/// previous frame count.
	pub fn insert_group(&mut self, group: &FrameGroup, rect: Option<IntRect>) -> usize {
		let first = self.frame_count();
		for frame in group.frames() {
			self.insert(frame, rect);
		}
		first
	}

	/// Inserts every frame of a group starting at `index`.
	///
	/// Returns `index`.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] if `index` is greater
	/// than the frame count. Nothing is inserted in that case.
	pub fn insert_group_at(&mut self, group: &FrameGroup, index: usize, rect: Option<IntRect>) -> Result<usize, OrionError> {
		let len = self.frame_count();
		if index > len {
			return Err(OrionError::out_of_range(index, len));
		}

		for (offset, frame) in group.frames().enumerate() {
			self.insert_at(frame, index + offset, rect)?;
		}
		Ok(index)
	}

	/// Overwrites the frame at `index`.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn replace(&mut self, index: usize, frame: Frame) -> Result<(), OrionError> {
		let rect = self.quad.display_rect();
		let display = self.frames.borrow_mut().replace(index, frame, &rect)?;
		self.track_size(display.size());
		self.refresh_if_current(index);
		Ok(())
	}

	/// Changes the size of the frame at `index`.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn resize_frame(&mut self, index: usize, size: Vector2i) -> Result<(), OrionError> {
		let rect = self.quad.display_rect();
		let display = self.frames.borrow_mut().set_size(index, size, &rect)?;
		self.track_size(display.size());
		self.refresh_if_current(index);
		Ok(())
	}

	/// Moves the frame at `index` to another position on the texture.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn reposition_frame(&mut self, index: usize, position: Vector2i) -> Result<(), OrionError> {
		self.frames.borrow_mut().set_position(index, position)?;
		self.refresh_if_current(index);
		Ok(())
	}

	/// Moves to the next frame, wrapping to the first after the last one.
	///
	/// Returns the new index. Without frames the index stays at 0 and the
	/// quad shows the display rectangle.
	pub fn advance(&mut self) -> usize {
		let next = self.index.wrapping_add(1);
		self.index = if next >= self.frame_count() {
			0
		} else {
			next
		};
		self.refresh();
		self.index
	}

	/// Jumps to the frame at `index`.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index;
	/// the playback index is unchanged.
	pub fn advance_to(&mut self, index: usize) -> Result<usize, OrionError> {
		let len = self.frame_count();
		if index >= len {
			return Err(OrionError::out_of_range(index, len));
		}

		self.index = index;
		self.refresh();
		Ok(index)
	}

	/// Returns the running maxima of frame width and height.
	///
	/// The two maxima are independent and may come from different frames.
	pub fn maximum_frame_size(&self) -> Vector2f {
		self.maximum_size
	}

	/// Returns the maximum frame size with the transform applied.
	///
	/// This is an approximation built from the current local bounds origin
	/// and the running maxima, not a bound over every transformed frame.
	pub fn maximum_transformed_size(&self) -> Vector2f {
		let bounds = self.local_bounds();
		let rect = FloatRect::new(bounds.left, bounds.top, self.maximum_size.x, self.maximum_size.y);
		self.quad.transformable().transform().transform_rect(&rect).size()
	}

	/// Number of stored frames.
	pub fn frame_count(&self) -> usize {
		self.frames.borrow().len()
	}

	/// Returns the playback index, or `None` before the first advance.
	pub fn current_index(&self) -> Option<usize> {
		(self.index != NOT_STARTED).then_some(self.index)
	}

	/// Returns the original frame at `index`.
	pub fn frame(&self, index: usize) -> Option<Frame> {
		self.frames.borrow().original(index).copied()
	}

	/// Returns the clipped frame at `index`.
	pub fn display_frame(&self, index: usize) -> Option<Frame> {
		self.frames.borrow().display(index).copied()
	}

	/// Returns the frame storage handle.
	pub fn storage(&self) -> &SharedFrames {
		&self.frames
	}

	/// Returns `true` if both animations play the same frame storage.
	pub fn shares_frames_with(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.frames, &other.frames)
	}

	fn effective_rect(&self, rect: Option<IntRect>) -> IntRect {
		match rect {
			Some(rect) if !rect.is_empty() => rect,
			_ => self.quad.display_rect(),
		}
	}

	fn track_size(&mut self, size: Vector2i) {
		self.maximum_size.x = self.maximum_size.x.max(size.x as f32);
		self.maximum_size.y = self.maximum_size.y.max(size.y as f32);
	}

	/// Index of the frame the geometry shows, clamping a stale index to 0.
	fn shown_index(&self) -> usize {
		if self.index < self.frame_count() {
			self.index
		} else {
			0
		}
	}

	fn shown_frame(&self) -> Option<Frame> {
		self.frames.borrow().display(self.shown_index()).copied()
	}

	fn refresh(&mut self) {
		self.update_position();
		self.update_texture_coordinates();
	}

	fn refresh_if_current(&mut self, index: usize) {
		if self.shown_index() == index {
			self.refresh();
		}
	}
}

impl Texturable for Animation {
	fn quad(&self) -> &TexturedQuad {
		&self.quad
	}

	fn quad_mut(&mut self) -> &mut TexturedQuad {
		&mut self.quad
	}

	fn set_display_rect(&mut self, rect: IntRect) {
		if rect == self.quad.display_rect() {
			return;
		}

		self.quad.store_display_rect(rect);
		self.frames.borrow_mut().apply_display_rect(&rect);
		self.refresh();
	}

	fn local_bounds(&self) -> FloatRect {
		let size = match self.shown_frame() {
			Some(frame) => frame.size(),
			None => self.quad.display_rect().size(),
		};
		FloatRect::new(0.0, 0.0, size.x.abs() as f32, size.y.abs() as f32)
	}

	fn update_texture_coordinates(&mut self) {
		let area = match self.shown_frame() {
			Some(frame) => frame.to_rect(),
			None => self.quad.display_rect(),
		}
		.as_f32();
		self.quad.set_texture_coordinates(area.left, area.top, area.width, area.height);
	}
}

impl Drawable for Animation {
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		self.quad.draw(target, states);
	}
}

#[cfg(test)]
mod tests;
