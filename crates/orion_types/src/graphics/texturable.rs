//! Capabilities shared by textured quads.
//!
//! [`Sprite`](super::Sprite) and [`Animation`](super::Animation) both draw a
//! single textured quad. They differ only in how the display rectangle, the
//! local bounds and the texture coordinates are derived, which is what the
//! required methods of [`Texturable`] capture.

use std::{
	io::{BufRead, Seek},
	path::Path,
};

use image::DynamicImage;

use crate::{
	error::OrionError,
	geometry::{FloatRect, IntRect, Transformable, Vector2f},
};

use super::{Color, Drawable, PrimitiveType, RenderStates, RenderTarget, TextureHandle, TextureManager, Vertex};

/// Geometry and texture state of a textured quad.
#[derive(Debug, Clone, Default)]
pub struct TexturedQuad {
	vertices: [Vertex; 4],
	texture: Option<TextureHandle>,
	display_rect: IntRect,
	transformable: Transformable,
}

impl TexturedQuad {
	/// Creates an untextured quad with white vertices.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the four vertices, anticlockwise from the top-left corner.
	pub fn vertices(&self) -> &[Vertex; 4] {
		&self.vertices
	}

	/// Returns the transform component.
	pub fn transformable(&self) -> &Transformable {
		&self.transformable
	}

	/// Returns the transform component mutably.
	pub fn transformable_mut(&mut self) -> &mut Transformable {
		&mut self.transformable
	}

	/// Returns the current display rectangle.
	pub fn display_rect(&self) -> IntRect {
		self.display_rect
	}

	/// Stores a new display rectangle without recomputing anything.
	pub fn store_display_rect(&mut self, rect: IntRect) {
		self.display_rect = rect;
	}

	/// Places the vertices on the corners of `bounds`' size.
	pub fn set_positions(&mut self, bounds: &FloatRect) {
		self.vertices[0].position = Vector2f::new(0.0, 0.0);
		self.vertices[1].position = Vector2f::new(0.0, bounds.height);
		self.vertices[2].position = Vector2f::new(bounds.width, bounds.height);
		self.vertices[3].position = Vector2f::new(bounds.width, 0.0);
	}

	/// Sets the texture coordinates from a texture area.
	pub fn set_texture_coordinates(&mut self, left: f32, top: f32, width: f32, height: f32) {
		let right = left + width;
		let bottom = top + height;
		self.vertices[0].tex_coords = Vector2f::new(left, top);
		self.vertices[1].tex_coords = Vector2f::new(left, bottom);
		self.vertices[2].tex_coords = Vector2f::new(right, bottom);
		self.vertices[3].tex_coords = Vector2f::new(right, top);
	}

	/// Draws the quad if a texture is set.
	pub fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		let Some(handle) = &self.texture else {
			return;
		};

		let texture = handle.borrow();
		let states = states.with_transform(&self.transformable.transform());
		target.draw_primitives(&self.vertices, PrimitiveType::Quads, &states.with_texture(&texture));
	}
}

/// Textured quad with a display rectangle.
pub trait Texturable: Drawable {
	/// Returns the shared quad state.
	fn quad(&self) -> &TexturedQuad;

	/// Returns the shared quad state mutably.
	fn quad_mut(&mut self) -> &mut TexturedQuad;

	/// Sets the part of the texture to display.
	fn set_display_rect(&mut self, rect: IntRect);

	/// Returns the bounds in local coordinates, ignoring the transform.
	fn local_bounds(&self) -> FloatRect;

	/// Recomputes the vertex texture coordinates.
	fn update_texture_coordinates(&mut self);

	/// Changes the source texture.
	///
	/// The display rectangle is reset to the whole texture if `reset_rect` is
	/// set, or if there was no texture and no display rectangle before.
	fn set_texture(&mut self, texture: TextureHandle, reset_rect: bool) {
		let quad = self.quad();
		let reset = reset_rect || (quad.texture.is_none() && quad.display_rect.is_empty());
		let size = texture.borrow().size();
		self.quad_mut().texture = Some(texture);
		if reset {
			self.set_display_rect(IntRect::new(0, 0, size.x as i32, size.y as i32));
		}
	}

	/// Returns the source texture.
	fn texture(&self) -> Option<&TextureHandle> {
		self.quad().texture.as_ref()
	}

	/// Returns the display rectangle.
	fn display_rect(&self) -> IntRect {
		self.quad().display_rect
	}

	/// Sets the color all texture pixels are multiplied with.
	fn set_color(&mut self, color: Color) {
		for vertex in &mut self.quad_mut().vertices {
			vertex.color = color;
		}
	}

	/// Returns the vertex color.
	fn color(&self) -> Color {
		self.quad().vertices[0].color
	}

	/// Sets the position.
	fn set_position(&mut self, position: Vector2f) {
		self.quad_mut().transformable.set_position(position);
	}

	/// Returns the position.
	fn position(&self) -> Vector2f {
		self.quad().transformable.position()
	}

	/// Sets the scale factors.
	fn set_scale(&mut self, scale: Vector2f) {
		self.quad_mut().transformable.set_scale(scale);
	}

	/// Returns the bounds after the transform is applied.
	fn global_bounds(&self) -> FloatRect {
		self.quad().transformable.transform().transform_rect(&self.local_bounds())
	}

	/// Returns the size without the transform.
	fn object_size(&self) -> Vector2f {
		self.local_bounds().size()
	}

	/// Returns the size with the transform.
	fn size(&self) -> Vector2f {
		self.global_bounds().size()
	}

	/// Places the vertices according to the local bounds.
	fn update_position(&mut self) {
		let bounds = self.local_bounds();
		self.quad_mut().set_positions(&bounds);
	}

	/// Sets the display rectangle, using the whole texture for the empty rectangle.
	fn apply_display_rect(&mut self, rect: IntRect) {
		if !rect.is_empty() {
			self.set_display_rect(rect);
			return;
		}

		let size = self.texture().map(|t| t.borrow().size());
		if let Some(size) = size {
			self.set_display_rect(IntRect::new(0, 0, size.x as i32, size.y as i32));
		}
	}

	/// Loads the texture from a file through `manager` and applies `display_rect`.
	///
	/// `load_rect` selects the part of the image to load.
	///
	/// # Errors
	///
	/// Returns the manager's error; the drawable is unchanged on failure.
	fn load_from_file(
		&mut self,
		manager: &mut TextureManager,
		key: &str,
		path: &Path,
		display_rect: IntRect,
		load_rect: IntRect,
	) -> Result<(), OrionError> {
		let texture = manager.load_from_file(key, path, &load_rect)?;
		self.quad_mut().texture = Some(texture);
		self.apply_display_rect(display_rect);
		Ok(())
	}

	/// Loads the texture from memory through `manager` and applies `display_rect`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	fn load_from_memory(
		&mut self,
		manager: &mut TextureManager,
		key: &str,
		data: &[u8],
		display_rect: IntRect,
		load_rect: IntRect,
	) -> Result<(), OrionError> {
		let texture = manager.load_from_memory(key, data, &load_rect)?;
		self.quad_mut().texture = Some(texture);
		self.apply_display_rect(display_rect);
		Ok(())
	}

	/// Loads the texture from a stream through `manager` and applies `display_rect`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	fn load_from_reader<R: BufRead + Seek>(
		&mut self,
		manager: &mut TextureManager,
		key: &str,
		reader: R,
		display_rect: IntRect,
		load_rect: IntRect,
	) -> Result<(), OrionError>
	where
		Self: Sized,
	{
		let texture = manager.load_from_reader(key, reader, &load_rect)?;
		self.quad_mut().texture = Some(texture);
		self.apply_display_rect(display_rect);
		Ok(())
	}

	/// Creates the texture from an image through `manager` and applies `display_rect`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	fn load_from_image(
		&mut self,
		manager: &mut TextureManager,
		key: &str,
		image: &DynamicImage,
		display_rect: IntRect,
		load_rect: IntRect,
	) -> Result<(), OrionError> {
		let texture = manager.load_from_image(key, image, &load_rect)?;
		self.quad_mut().texture = Some(texture);
		self.apply_display_rect(display_rect);
		Ok(())
	}
}
