//! Window seam.
//!
//! The shell drives any backend implementing [`Window`]: it polls events,
//! draws through the [`RenderTarget`] supertrait and presents the frame.

use image::RgbaImage;
use orion_types::{
	geometry::{FloatRect, Vector2u},
	graphics::{Color, FontHandle, RenderTarget},
	system::Key,
};

use crate::error::ShellError;

/// Input and window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
	/// A character was typed
	TextEntered(Key),
	/// The window was resized
	Resized {
		/// New width in pixels
		width: u32,
		/// New height in pixels
		height: u32,
	},
	/// The window was asked to close
	Closed,
}

/// Window that can be drawn to and polled for events.
pub trait Window: RenderTarget {
	/// Returns the next pending event without blocking.
	fn poll_event(&mut self) -> Option<Event>;

	/// Returns `true` until the window is closed.
	fn is_open(&self) -> bool;

	/// Closes the window.
	fn close(&mut self);

	/// Fills the back buffer with one color.
	fn clear(&mut self, color: Color);

	/// Presents the back buffer.
	fn display(&mut self);

	/// Returns the size of the drawable area.
	fn size(&self) -> Vector2u;

	/// Sets the area of the scene shown in the window.
	fn set_view(&mut self, view: FloatRect);

	/// Sets the window icon.
	fn set_icon(&mut self, icon: &RgbaImage);

	/// Returns the size of the desktop the window lives on.
	fn desktop_size(&self) -> Vector2u;

	/// Creates a font from font file data.
	///
	/// # Errors
	///
	/// Returns [`ShellError::Font`] if the backend cannot use the data.
	fn load_font(&self, data: &[u8]) -> Result<FontHandle, ShellError>;
}
