//! Drawables, textures and the frame repository.

mod animation;
mod color;
mod font;
mod frame;
mod frame_repository;
mod render;
mod shape;
mod sprite;
mod text;
mod texturable;
mod texture;
mod texture_manager;

pub use animation::Animation;
pub use color::Color;
pub use font::{Font, FontHandle, Glyph, MonospaceFont};
pub use frame::{Frame, FrameGroup};
pub use frame_repository::{FrameRegistry, FrameStore, SharedFrames, intersect};
pub use render::{Drawable, PrimitiveType, RecordingTarget, RenderStates, RenderTarget, Vertex};
pub use shape::RectangleShape;
pub use sprite::Sprite;
pub use text::{Text, TextStyle};
pub use texturable::{Texturable, TexturedQuad};
pub use texture::{Texture, TextureHandle};
pub use texture_manager::TextureManager;
