//! Laid-out text.
//!
//! [`Text`] turns a string into one quad per glyph using the metrics of a
//! [`Font`]. The geometry is rebuilt whenever the string, font, size or style
//! changes, so drawing and bounds queries never lay out again.

use std::rc::Rc;

use crate::geometry::{FloatRect, Transformable, Vector2f};

use super::{Color, Drawable, FontHandle, PrimitiveType, RenderStates, RenderTarget, Vertex};

/// Horizontal shear applied to italic glyphs.
const ITALIC_SHEAR: f32 = 0.208;

/// Tabulators span this many spaces, vertical tabulators this many lines.
const TAB_WIDTH: f32 = 4.0;

/// Style flags of a text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
	/// Bold glyphs
	pub bold: bool,
	/// Sheared glyphs
	pub italic: bool,
	/// Line below each text line
	pub underlined: bool,
}

impl TextStyle {
	/// No decoration.
	pub const REGULAR: Self = Self {
		bold: false,
		italic: false,
		underlined: false,
	};
}

/// String drawn with a font.
#[derive(Clone)]
pub struct Text {
	string: Vec<char>,
	font: Option<FontHandle>,
	character_size: u32,
	style: TextStyle,
	color: Color,
	vertices: Vec<Vertex>,
	bounds: FloatRect,
	transformable: Transformable,
}

impl Default for Text {
	fn default() -> Self {
		Self {
			string: Vec::new(),
			font: None,
			character_size: 30,
			style: TextStyle::REGULAR,
			color: Color::WHITE,
			vertices: Vec::new(),
			bounds: FloatRect::default(),
			transformable: Transformable::new(),
		}
	}
}

impl std::fmt::Debug for Text {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Text")
			.field("string", &self.string())
			.field("has_font", &self.font.is_some())
			.field("character_size", &self.character_size)
			.field("style", &self.style)
			.field("bounds", &self.bounds)
			.finish()
	}
}

impl Text {
	/// Creates a text and lays it out.
	pub fn new(string: &str, font: FontHandle, character_size: u32) -> Self {
		let mut text = Self {
			string: string.chars().collect(),
			font: Some(font),
			character_size,
			..Self::default()
		};
		text.update_geometry();
		text
	}

	/// Replaces the string.
	pub fn set_string(&mut self, string: &str) {
		if self.string.iter().copied().ne(string.chars()) {
			self.string = string.chars().collect();
			self.update_geometry();
		}
	}

	/// Returns the string.
	pub fn string(&self) -> String {
		self.string.iter().collect()
	}

	/// Sets the font.
	pub fn set_font(&mut self, font: FontHandle) {
		let same = self.font.as_ref().is_some_and(|f| Rc::ptr_eq(f, &font));
		if !same {
			self.font = Some(font);
			self.update_geometry();
		}
	}

	/// Returns the font.
	pub fn font(&self) -> Option<&FontHandle> {
		self.font.as_ref()
	}

	/// Sets the character size in pixels.
	pub fn set_character_size(&mut self, size: u32) {
		if self.character_size != size {
			self.character_size = size;
			self.update_geometry();
		}
	}

	/// Returns the character size.
	pub fn character_size(&self) -> u32 {
		self.character_size
	}

	/// Sets the style flags.
	pub fn set_style(&mut self, style: TextStyle) {
		if self.style != style {
			self.style = style;
			self.update_geometry();
		}
	}

	/// Returns the style flags.
	pub fn style(&self) -> TextStyle {
		self.style
	}

	/// Sets the fill color.
	pub fn set_color(&mut self, color: Color) {
		self.color = color;
		for vertex in &mut self.vertices {
			vertex.color = color;
		}
	}

	/// Returns the fill color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Returns the transform component.
	pub fn transformable(&self) -> &Transformable {
		&self.transformable
	}

	/// Returns the transform component mutably.
	pub fn transformable_mut(&mut self) -> &mut Transformable {
		&mut self.transformable
	}

	/// Sets the position.
	pub fn set_position(&mut self, position: Vector2f) {
		self.transformable.set_position(position);
	}

	/// Returns the position.
	pub fn position(&self) -> Vector2f {
		self.transformable.position()
	}

	/// Returns the laid-out glyph vertices, four per quad.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Returns the global position of the character at `index`.
	///
	/// An index past the end is clamped to the end of the string, which is
	/// where the next character would go.
	pub fn find_character_position(&self, index: usize) -> Vector2f {
		let Some(font) = &self.font else {
			return Vector2f::default();
		};

		let index = index.min(self.string.len());
		let size = self.character_size;
		let bold = self.style.bold;
		let hspace = font.glyph(' ' as u32, size, bold).advance;
		let vspace = font.line_spacing(size);

		let mut position = Vector2f::default();
		let mut previous = 0;
		for &c in &self.string[..index] {
			let current = c as u32;
			position.x += font.kerning(previous, current, size);
			previous = current;

			match c {
				' ' => position.x += hspace,
				'\t' => position.x += hspace * TAB_WIDTH,
				'\n' => {
					position.y += vspace;
					position.x = 0.0;
				}
				'\u{0B}' => position.y += vspace * TAB_WIDTH,
				_ => position.x += font.glyph(current, size, bold).advance,
			}
		}

		self.transformable.transform().transform_point(position)
	}

	/// Returns the bounds in local coordinates.
	pub fn local_bounds(&self) -> FloatRect {
		self.bounds
	}

	/// Returns the bounds with the transform applied.
	pub fn global_bounds(&self) -> FloatRect {
		self.transformable.transform().transform_rect(&self.bounds)
	}

	/// Returns the untransformed size.
	pub fn object_size(&self) -> Vector2f {
		self.bounds.size()
	}

	/// Returns the transformed size.
	pub fn size(&self) -> Vector2f {
		self.global_bounds().size()
	}

	fn update_geometry(&mut self) {
		self.vertices.clear();
		self.bounds = FloatRect::default();

		let Some(font) = self.font.clone() else {
			return;
		};
		if self.string.is_empty() {
			return;
		}

		let size = self.character_size;
		let bold = self.style.bold;
		let shear = if self.style.italic {
			ITALIC_SHEAR
		} else {
			0.0
		};
		let underline_offset = size as f32 * 0.1;
		let underline_ratio = if bold {
			0.1
		} else {
			0.07
		};
		let underline_thickness = size as f32 * underline_ratio;

		let hspace = font.glyph(' ' as u32, size, bold).advance;
		let vspace = font.line_spacing(size);
		let mut x = 0.0_f32;
		let mut y = size as f32;

		let mut min_x = size as f32;
		let mut min_y = size as f32;
		let mut max_x = 0.0_f32;
		let mut max_y = 0.0_f32;
		let mut previous = 0;

		for index in 0..self.string.len() {
			let c = self.string[index];
			let current = c as u32;
			x += font.kerning(previous, current, size);
			previous = current;

			if self.style.underlined && c == '\n' {
				self.push_underline(x, y + underline_offset, underline_thickness);
			}

			if matches!(c, ' ' | '\t' | '\n' | '\u{0B}') {
				min_x = min_x.min(x);
				min_y = min_y.min(y);
				match c {
					' ' => x += hspace,
					'\t' => x += hspace * TAB_WIDTH,
					'\n' => {
						y += vspace;
						x = 0.0;
					}
					_ => y += vspace * TAB_WIDTH,
				}
				max_x = max_x.max(x);
				max_y = max_y.max(y);
				continue;
			}

			let glyph = font.glyph(current, size, bold);
			let left = glyph.bounds.left;
			let top = glyph.bounds.top;
			let right = left + glyph.bounds.width;
			let bottom = top + glyph.bounds.height;

			let area = glyph.texture_rect.as_f32();
			let (u1, v1) = (area.left, area.top);
			let (u2, v2) = (area.left + area.width, area.top + area.height);

			let color = self.color;
			self.vertices.extend([
				Vertex::new(Vector2f::new(x + left - shear * top, y + top), color, Vector2f::new(u1, v1)),
				Vertex::new(Vector2f::new(x + right - shear * top, y + top), color, Vector2f::new(u2, v1)),
				Vertex::new(Vector2f::new(x + right - shear * bottom, y + bottom), color, Vector2f::new(u2, v2)),
				Vertex::new(Vector2f::new(x + left - shear * bottom, y + bottom), color, Vector2f::new(u1, v2)),
			]);

			min_x = min_x.min(x + left - shear * bottom);
			max_x = max_x.max(x + right - shear * top);
			min_y = min_y.min(y + top);
			max_y = max_y.max(y + bottom);

			x += glyph.advance;
		}

		if self.style.underlined {
			self.push_underline(x, y + underline_offset, underline_thickness);
		}

		self.bounds = FloatRect::new(min_x, min_y, max_x - min_x, max_y - min_y);
	}

	fn push_underline(&mut self, width: f32, top: f32, thickness: f32) {
		let bottom = top + thickness;
		let texel = Vector2f::new(1.0, 1.0);
		let color = self.color;
		self.vertices.extend([
			Vertex::new(Vector2f::new(0.0, top), color, texel),
			Vertex::new(Vector2f::new(width, top), color, texel),
			Vertex::new(Vector2f::new(width, bottom), color, texel),
			Vertex::new(Vector2f::new(0.0, bottom), color, texel),
		]);
	}
}

impl Drawable for Text {
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		let Some(font) = &self.font else {
			return;
		};
		if self.vertices.is_empty() {
			return;
		}

		let states = states.with_transform(&self.transformable.transform());
		match font.texture(self.character_size) {
			Some(handle) => {
				let texture = handle.borrow();
				target.draw_primitives(&self.vertices, PrimitiveType::Quads, &states.with_texture(&texture));
			}
			None => target.draw_primitives(&self.vertices, PrimitiveType::Quads, &states),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graphics::{MonospaceFont, RecordingTarget};

	fn font() -> FontHandle {
		MonospaceFont::new().into_handle()
	}

	#[test]
	fn test_one_quad_per_visible_glyph() {
		let text = Text::new("ab c", font(), 15);
		assert_eq!(text.vertices().len(), 12);
	}

	#[test]
	fn test_bounds_single_line() {
		// 15px: advance 9, glyph block 8 wide and 11 high above the baseline at y = 15.
		let text = Text::new("abc", font(), 15);
		assert_eq!(text.local_bounds(), FloatRect::new(0.0, 4.0, 26.0, 11.0));
	}

	#[test]
	fn test_find_character_position() {
		let mut text = Text::new("ab\ncd", font(), 15);
		assert_eq!(text.find_character_position(1), Vector2f::new(9.0, 0.0));
		assert_eq!(text.find_character_position(3), Vector2f::new(0.0, 18.0));
		assert_eq!(text.find_character_position(99), Vector2f::new(18.0, 18.0));

		text.set_position(Vector2f::new(100.0, 50.0));
		assert_eq!(text.find_character_position(0), Vector2f::new(100.0, 50.0));
	}

	#[test]
	fn test_tab_and_vertical_tab() {
		let text = Text::new("\ta\u{0B}", font(), 10);
		// 10px: advance 6, line spacing 12.
		assert_eq!(text.find_character_position(1), Vector2f::new(24.0, 0.0));
		assert_eq!(text.find_character_position(3), Vector2f::new(30.0, 48.0));
	}

	#[test]
	fn test_underline_adds_quad() {
		let mut text = Text::new("ab", font(), 15);
		text.set_style(TextStyle {
			underlined: true,
			..TextStyle::REGULAR
		});
		assert_eq!(text.vertices().len(), 12);
		assert_eq!(text.vertices()[9].position.x, 18.0);
	}

	#[test]
	fn test_italic_shears_glyphs() {
		let mut text = Text::new("a", font(), 15);
		let upright = text.vertices()[0].position;
		text.set_style(TextStyle {
			italic: true,
			..TextStyle::REGULAR
		});
		assert!(text.vertices()[0].position.x > upright.x);
	}

	#[test]
	fn test_no_font_draws_nothing() {
		let text = Text::default();
		let mut target = RecordingTarget::default();
		text.draw(&mut target, &RenderStates::default());
		assert!(target.calls.is_empty());
		assert_eq!(text.find_character_position(3), Vector2f::default());
	}

	#[test]
	fn test_set_color_recolors_vertices() {
		let mut text = Text::new("a", font(), 15);
		text.set_color(Color::BLACK);
		assert!(text.vertices().iter().all(|v| v.color == Color::BLACK));
	}
}
