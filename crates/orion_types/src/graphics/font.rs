//! Font metrics seam.
//!
//! Text layout only needs glyph metrics, kerning and line spacing, plus a
//! texture holding the rasterized glyphs. Whoever rasterizes fonts implements
//! [`Font`]; [`MonospaceFont`] is a fixed-metric implementation that renders
//! every glyph as a solid block.

use std::rc::Rc;

use crate::geometry::{FloatRect, IntRect};

use super::{Color, Texture, TextureHandle};

/// Shared font used by any number of texts.
pub type FontHandle = Rc<dyn Font>;

/// Metrics and texture area of one glyph.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Glyph {
	/// Horizontal offset to the next glyph
	pub advance: f32,
	/// Bounding rectangle relative to the baseline
	pub bounds: FloatRect,
	/// Area of the glyph on the font texture
	pub texture_rect: IntRect,
}

/// Glyph metrics provider.
pub trait Font {
	/// Returns the glyph for a code point at a character size.
	fn glyph(&self, code_point: u32, character_size: u32, bold: bool) -> Glyph;

	/// Returns the kerning offset between two code points.
	fn kerning(&self, first: u32, second: u32, character_size: u32) -> f32;

	/// Returns the distance between two consecutive lines.
	fn line_spacing(&self, character_size: u32) -> f32;

	/// Returns the glyph texture for a character size, if there is one.
	fn texture(&self, character_size: u32) -> Option<TextureHandle>;
}

/// Font where every glyph has the same advance and draws as a filled block.
#[derive(Debug, Clone)]
pub struct MonospaceFont {
	atlas: TextureHandle,
}

impl MonospaceFont {
	/// Width of a glyph relative to the character size.
	pub const ADVANCE_RATIO: f32 = 0.6;
	/// Line spacing relative to the character size.
	pub const LINE_SPACING_RATIO: f32 = 1.2;

	/// Creates the font.
	pub fn new() -> Self {
		Self {
			atlas: Texture::solid(2, 2, Color::WHITE).into_handle(),
		}
	}

	/// Returns the font as a shared handle.
	pub fn into_handle(self) -> FontHandle {
		Rc::new(self)
	}
}

impl Default for MonospaceFont {
	fn default() -> Self {
		Self::new()
	}
}

impl Font for MonospaceFont {
	fn glyph(&self, code_point: u32, character_size: u32, bold: bool) -> Glyph {
		let size = character_size as f32;
		let weight = if bold {
			1.0
		} else {
			0.0
		};
		let advance = (size * Self::ADVANCE_RATIO).round() + weight;

		let blank = char::from_u32(code_point).is_none_or(char::is_whitespace);
		let bounds = if blank {
			FloatRect::default()
		} else {
			// Block from cap height down to the baseline, one pixel narrower than the advance.
			let height = (size * 0.7).round();
			FloatRect::new(0.0, -height, (advance - 1.0).max(1.0), height)
		};

		Glyph {
			advance,
			bounds,
			texture_rect: IntRect::new(0, 0, 2, 2),
		}
	}

	fn kerning(&self, _first: u32, _second: u32, _character_size: u32) -> f32 {
		0.0
	}

	fn line_spacing(&self, character_size: u32) -> f32 {
		(character_size as f32 * Self::LINE_SPACING_RATIO).round()
	}

	fn texture(&self, _character_size: u32) -> Option<TextureHandle> {
		Some(Rc::clone(&self.atlas))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_monospace_metrics() {
		let font = MonospaceFont::new();
		let a = font.glyph('a' as u32, 15, false);
		let w = font.glyph('W' as u32, 15, false);
		assert_eq!(a.advance, 9.0);
		assert_eq!(a.advance, w.advance);
		assert_eq!(font.glyph('a' as u32, 15, true).advance, 10.0);
		assert_eq!(font.line_spacing(15), 18.0);
	}

	#[test]
	fn test_whitespace_has_no_bounds() {
		let font = MonospaceFont::new();
		let space = font.glyph(' ' as u32, 20, false);
		assert_eq!(space.bounds, FloatRect::default());
		assert_eq!(space.advance, 12.0);
	}
}
