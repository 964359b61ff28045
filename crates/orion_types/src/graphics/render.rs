//! Rendering seam between drawables and the graphics backend.
//!
//! Drawables never talk to a window or a GPU directly. They produce vertices
//! and hand them to a [`RenderTarget`], which is implemented by whatever
//! backend actually puts pixels on a surface.

use crate::geometry::{Transform, Vector2f};

use super::{Color, Texture};

/// A point with color and texture coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vertex {
	/// Position in local coordinates
	pub position: Vector2f,
	/// Vertex color, multiplied with the texture color
	pub color: Color,
	/// Texture coordinates in pixels
	pub tex_coords: Vector2f,
}

impl Vertex {
	/// Creates a vertex.
	pub fn new(position: Vector2f, color: Color, tex_coords: Vector2f) -> Self {
		Self {
			position,
			color,
			tex_coords,
		}
	}
}

/// How a vertex slice is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
	/// Every three vertices form a triangle
	Triangles,
	/// Every four vertices form a quad, given anticlockwise
	Quads,
}

/// Transform and texture applied to a draw call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStates<'a> {
	/// Transform from local to target coordinates
	pub transform: Transform,
	/// Texture sampled with the vertex texture coordinates
	pub texture: Option<&'a Texture>,
}

impl<'a> RenderStates<'a> {
	/// Returns states with `transform` applied after the current transform.
	pub fn with_transform(&self, transform: &Transform) -> Self {
		Self {
			transform: self.transform.combine(transform),
			texture: self.texture,
		}
	}

	/// Returns states with the given texture bound.
	pub fn with_texture<'b>(&self, texture: &'b Texture) -> RenderStates<'b>
	where
		'a: 'b,
	{
		RenderStates {
			transform: self.transform,
			texture: Some(texture),
		}
	}
}

/// Surface that can rasterize primitives.
pub trait RenderTarget {
	/// Draws vertices assembled as `primitive` with the given states.
	fn draw_primitives(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates<'_>);
}

/// Anything that can draw itself to a [`RenderTarget`].
pub trait Drawable {
	/// Draws the object.
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>);
}

/// Render target that records every draw call, used to inspect drawables.
#[derive(Debug, Default)]
pub struct RecordingTarget {
	/// Recorded calls: vertices, primitive type, transform and whether a texture was bound
	pub calls: Vec<(Vec<Vertex>, PrimitiveType, Transform, bool)>,
}

impl RenderTarget for RecordingTarget {
	fn draw_primitives(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates<'_>) {
		self.calls.push((vertices.to_vec(), primitive, states.transform, states.texture.is_some()));
	}
}
