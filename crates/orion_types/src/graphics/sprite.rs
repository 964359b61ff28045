//! Static textured quad.

use crate::geometry::{FloatRect, IntRect};

use super::{Drawable, RenderStates, RenderTarget, Texturable, TextureHandle, TexturedQuad};

/// Draws one fixed area of a texture.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
	quad: TexturedQuad,
}

impl Sprite {
	/// Creates a sprite without a texture.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a sprite showing the whole texture.
	pub fn with_texture(texture: TextureHandle) -> Self {
		let mut sprite = Self::new();
		sprite.set_texture(texture, true);
		sprite
	}

	/// Creates a sprite showing `rect` of the texture.
	pub fn with_texture_rect(texture: TextureHandle, rect: IntRect) -> Self {
		let mut sprite = Self::new();
		sprite.set_texture(texture, false);
		sprite.set_display_rect(rect);
		sprite
	}
}

impl Texturable for Sprite {
	fn quad(&self) -> &TexturedQuad {
		&self.quad
	}

	fn quad_mut(&mut self) -> &mut TexturedQuad {
		&mut self.quad
	}

	fn set_display_rect(&mut self, rect: IntRect) {
		if rect != self.quad.display_rect() {
			self.quad.store_display_rect(rect);
			self.update_position();
			self.update_texture_coordinates();
		}
	}

	fn local_bounds(&self) -> FloatRect {
		let rect = self.quad.display_rect();
		FloatRect::new(0.0, 0.0, rect.width.abs() as f32, rect.height.abs() as f32)
	}

	fn update_texture_coordinates(&mut self) {
		let rect = self.quad.display_rect().as_f32();
		self.quad.set_texture_coordinates(rect.left, rect.top, rect.width, rect.height);
	}
}

impl Drawable for Sprite {
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		self.quad.draw(target, states);
	}
}
