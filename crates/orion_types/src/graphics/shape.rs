//! Filled and outlined rectangles.

use crate::geometry::{FloatRect, Transformable, Vector2f};

use super::{Color, Drawable, PrimitiveType, RenderStates, RenderTarget, Vertex};

/// Axis-aligned rectangle with a fill color and an outline.
///
/// The outline is drawn outside the rectangle for a positive thickness and
/// inside for a negative one.
#[derive(Debug, Clone, Default)]
pub struct RectangleShape {
	size: Vector2f,
	fill_color: Color,
	outline_color: Color,
	outline_thickness: f32,
	transformable: Transformable,
}

impl RectangleShape {
	/// Creates a white rectangle without outline.
	pub fn new(size: Vector2f) -> Self {
		Self {
			size,
			..Self::default()
		}
	}

	/// Sets the size.
	pub fn set_size(&mut self, size: Vector2f) {
		self.size = size;
	}

	/// Returns the size, excluding the outline.
	pub fn size(&self) -> Vector2f {
		self.size
	}

	/// Sets the fill color.
	pub fn set_fill_color(&mut self, color: Color) {
		self.fill_color = color;
	}

	/// Returns the fill color.
	pub fn fill_color(&self) -> Color {
		self.fill_color
	}

	/// Sets the outline color.
	pub fn set_outline_color(&mut self, color: Color) {
		self.outline_color = color;
	}

	/// Returns the outline color.
	pub fn outline_color(&self) -> Color {
		self.outline_color
	}

	/// Sets the outline thickness.
	pub fn set_outline_thickness(&mut self, thickness: f32) {
		self.outline_thickness = thickness;
	}

	/// Returns the outline thickness.
	pub fn outline_thickness(&self) -> f32 {
		self.outline_thickness
	}

	/// Sets the position.
	pub fn set_position(&mut self, position: Vector2f) {
		self.transformable.set_position(position);
	}

	/// Returns the position.
	pub fn position(&self) -> Vector2f {
		self.transformable.position()
	}

	/// Returns the transform component mutably.
	pub fn transformable_mut(&mut self) -> &mut Transformable {
		&mut self.transformable
	}

	/// Returns the bounds including the outline, in local coordinates.
	pub fn local_bounds(&self) -> FloatRect {
		let t = self.outline_thickness.max(0.0);
		FloatRect::new(-t, -t, self.size.x + 2.0 * t, self.size.y + 2.0 * t)
	}

	/// Returns the bounds including the outline, with the transform applied.
	pub fn global_bounds(&self) -> FloatRect {
		self.transformable.transform().transform_rect(&self.local_bounds())
	}

	fn outline_quads(&self) -> Vec<Vertex> {
		let t = self.outline_thickness;
		if t == 0.0 {
			return Vec::new();
		}

		let (w, h) = (self.size.x, self.size.y);
		// Normalise so the bands work for both inner and outer outlines.
		let (outer, inner) = if t > 0.0 {
			(FloatRect::new(-t, -t, w + 2.0 * t, h + 2.0 * t), FloatRect::new(0.0, 0.0, w, h))
		} else {
			(FloatRect::new(0.0, 0.0, w, h), FloatRect::new(-t, -t, w + 2.0 * t, h + 2.0 * t))
		};
		let band = t.abs();

		[
			FloatRect::new(outer.left, outer.top, outer.width, band),
			FloatRect::new(outer.left, inner.top + inner.height, outer.width, band),
			FloatRect::new(outer.left, inner.top, band, inner.height),
			FloatRect::new(inner.left + inner.width, inner.top, band, inner.height),
		]
		.iter()
		.flat_map(|r| quad(r, self.outline_color))
		.collect()
	}
}

fn quad(rect: &FloatRect, color: Color) -> [Vertex; 4] {
	let (l, t) = (rect.left, rect.top);
	let (r, b) = (rect.left + rect.width, rect.top + rect.height);
	[
		Vertex::new(Vector2f::new(l, t), color, Vector2f::default()),
		Vertex::new(Vector2f::new(l, b), color, Vector2f::default()),
		Vertex::new(Vector2f::new(r, b), color, Vector2f::default()),
		Vertex::new(Vector2f::new(r, t), color, Vector2f::default()),
	]
}

impl Drawable for RectangleShape {
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		let states = RenderStates {
			transform: states.transform.combine(&self.transformable.transform()),
			texture: None,
		};

		let fill = quad(&FloatRect::new(0.0, 0.0, self.size.x, self.size.y), self.fill_color);
		target.draw_primitives(&fill, PrimitiveType::Quads, &states);

		let outline = self.outline_quads();
		if !outline.is_empty() {
			target.draw_primitives(&outline, PrimitiveType::Quads, &states);
		}
	}
}
