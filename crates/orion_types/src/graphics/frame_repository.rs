//! Shared storage for animation frames.
//!
//! Every [`Animation`](super::Animation) keeps its frames in a [`FrameStore`]
//! held through a [`SharedFrames`] handle, so the animation itself stays small
//! and cheap to pass around. Cloning an animation aliases the store instead of
//! copying the frames.
//!
//! # Frame Sequences
//!
//! A store holds two sequences of equal length:
//!
//! ```text
//! index     0        1        2     ...
//! original  Frame    Frame    Frame       frames as inserted
//! display   Frame'   Frame'   Frame'      original ∩ display rectangle
//! ```
//!
//! The display frame keeps the position of its original frame and takes the
//! width and height of the intersection of the frame-local rectangle
//! `(0, 0, w, h)` with the display rectangle. The default (all-zero) display
//! rectangle means "no clipping" and copies the original frame verbatim.
//!
//! # Lifetime
//!
//! Stores are created through a [`FrameRegistry`], which keeps a weak
//! reference to each of them for inspection. A store is freed as soon as its
//! last holder drops; [`FrameRegistry::compact`] removes the dead entries.
//!
//! # Indices
//!
//! All index-taking operations are bounds checked and report
//! [`OrionError::FrameIndexOutOfRange`] instead of touching any frame.

use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};

use log::debug;

use crate::{
	error::OrionError,
	geometry::{IntRect, Vector2i},
};

use super::Frame;

/// Shared handle to a frame store.
pub type SharedFrames = Rc<RefCell<FrameStore>>;

/// Intersects a frame with a display rectangle in frame-local space.
///
/// The frame is placed at `(0, 0)` for the intersection test. The result keeps
/// the frame's original position and takes the size of the intersection, or
/// a zero size if the two do not overlap. The empty rectangle leaves the
/// frame unchanged.
///
/// # Examples
///
/// ```
/// use orion_types::geometry::IntRect;
/// use orion_types::graphics::{intersect, Frame};
///
/// let frame = Frame::new(107, 0, 108, 96);
/// let clipped = intersect(&frame, &IntRect::new(0, 0, 106, 96));
/// assert_eq!(clipped, Frame::new(107, 0, 106, 96));
/// ```
pub fn intersect(frame: &Frame, rect: &IntRect) -> Frame {
	if rect.is_empty() {
		return *frame;
	}

	let local = IntRect::new(0, 0, frame.w, frame.h);
	match local.intersection(rect) {
		Some(area) => Frame::new(frame.x, frame.y, area.width, area.height),
		None => Frame::new(frame.x, frame.y, 0, 0),
	}
}

/// Original and display frames of one animation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameStore {
	original: Vec<Frame>,
	display: Vec<Frame>,
}

impl FrameStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored frames.
	pub fn len(&self) -> usize {
		debug_assert_eq!(self.original.len(), self.display.len());
		self.original.len()
	}

	/// Returns `true` if no frames are stored.
	pub fn is_empty(&self) -> bool {
		self.original.is_empty()
	}

	/// Returns the original frame at `index`.
	pub fn original(&self, index: usize) -> Option<&Frame> {
		self.original.get(index)
	}

	/// Returns the display frame at `index`.
	pub fn display(&self, index: usize) -> Option<&Frame> {
		self.display.get(index)
	}

	/// Returns all original frames.
	pub fn originals(&self) -> &[Frame] {
		&self.original
	}

	/// Returns all display frames.
	pub fn displays(&self) -> &[Frame] {
		&self.display
	}

	/// Appends a frame and returns its index.
	pub fn push(&mut self, frame: Frame, display_rect: &IntRect) -> usize {
		self.original.push(frame);
		self.display.push(intersect(&frame, display_rect));
		self.original.len() - 1
	}

	/// Inserts a frame at `index`, shifting the following frames back.
	///
	/// `index` may equal [`len`](Self::len), which appends.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] if `index > len`.
	pub fn insert_at(&mut self, frame: Frame, index: usize, display_rect: &IntRect) -> Result<usize, OrionError> {
		if index > self.len() {
			return Err(OrionError::out_of_range(index, self.len()));
		}

		self.original.insert(index, frame);
		self.display.insert(index, intersect(&frame, display_rect));
		Ok(index)
	}

	/// Overwrites the frame at `index` and recomputes its display frame.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn replace(&mut self, index: usize, frame: Frame, display_rect: &IntRect) -> Result<Frame, OrionError> {
		self.check(index)?;
		self.original[index] = frame;
		self.display[index] = intersect(&frame, display_rect);
		Ok(self.display[index])
	}

	/// Changes the size of the frame at `index` and recomputes its display frame.
	///
	/// Returns the new display frame.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn set_size(&mut self, index: usize, size: Vector2i, display_rect: &IntRect) -> Result<Frame, OrionError> {
		self.check(index)?;
		let original = &mut self.original[index];
		original.w = size.x;
		original.h = size.y;
		self.display[index] = intersect(original, display_rect);
		Ok(self.display[index])
	}

	/// Moves the frame at `index` to another position on the texture.
	///
	/// The intersection only depends on the frame size, so both sequences are
	/// updated in place without clipping again.
	///
	/// # Errors
	///
	/// Returns [`OrionError::FrameIndexOutOfRange`] for an invalid index.
	pub fn set_position(&mut self, index: usize, position: Vector2i) -> Result<(), OrionError> {
		self.check(index)?;
		for frame in [&mut self.original[index], &mut self.display[index]] {
			frame.x = position.x;
			frame.y = position.y;
		}
		Ok(())
	}

	/// Recomputes every display frame from its original frame.
	pub fn apply_display_rect(&mut self, display_rect: &IntRect) {
		for (display, original) in self.display.iter_mut().zip(&self.original) {
			*display = intersect(original, display_rect);
		}
	}

	fn check(&self, index: usize) -> Result<(), OrionError> {
		if index < self.len() {
			Ok(())
		} else {
			Err(OrionError::out_of_range(index, self.len()))
		}
	}
}

/// Registry of every frame store created by the application.
///
/// The registry is an ordinary value owned by the application: create it at
/// startup and drop it at shutdown. It holds weak references only, so it never
/// keeps a store alive.
#[derive(Debug, Default)]
pub struct FrameRegistry {
	entries: Vec<Weak<RefCell<FrameStore>>>,
}

impl FrameRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates a new empty store and records it.
	pub fn create(&mut self) -> SharedFrames {
		let store = Rc::new(RefCell::new(FrameStore::new()));
		self.entries.push(Rc::downgrade(&store));
		store
	}

	/// Number of recorded entries, including released ones not yet compacted.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing is recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of stores that still have at least one holder.
	pub fn live_count(&self) -> usize {
		self.entries.iter().filter(|entry| entry.strong_count() > 0).count()
	}

	/// Number of holders of the entry at `index`, or `None` if there is no such entry.
	pub fn holders(&self, index: usize) -> Option<usize> {
		self.entries.get(index).map(Weak::strong_count)
	}

	/// Removes every entry whose store has been released.
	///
	/// Returns the number of removed entries.
	pub fn compact(&mut self) -> usize {
		let before = self.entries.len();
		self.entries.retain(|entry| entry.strong_count() > 0);
		let removed = before - self.entries.len();
		if removed > 0 {
			debug!("Compacted frame registry: removed {}, {} remaining", removed, self.entries.len());
		}
		removed
	}
}
