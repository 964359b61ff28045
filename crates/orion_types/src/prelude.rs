//! Prelude module for `orion_types`.
//!
//! # Examples
//!
//! ```
//! use orion_types::prelude::*;
//!
//! let sprite = Sprite::with_texture(Texture::solid(4, 4, Color::WHITE).into_handle());
//! assert_eq!(sprite.display_rect(), IntRect::new(0, 0, 4, 4));
//! ```

#[doc(inline)]
pub use crate::error::OrionError;

// Geometry
#[doc(inline)]
pub use crate::geometry::{FloatRect, IntRect, Transform, Transformable, Vector2f, Vector2i, Vector2u};

// Drawables and their seams
#[doc(inline)]
pub use crate::graphics::{
	Animation, Color, Drawable, Font, FontHandle, MonospaceFont, RectangleShape, RenderStates, RenderTarget, Sprite,
	Text, TextStyle, Texturable,
};

// Frames and textures
#[doc(inline)]
pub use crate::graphics::{Frame, FrameGroup, FrameRegistry, SharedFrames, Texture, TextureHandle, TextureManager};

// System
#[doc(inline)]
pub use crate::system::{Key, time_string, unicode};
