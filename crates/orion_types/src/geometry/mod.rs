//! Geometry primitives: vectors, rectangles and affine transforms.

mod rect;
mod transform;
mod vector;

pub use rect::{FloatRect, IntRect, Rect};
pub use transform::{Transform, Transformable};
pub use vector::{Vector2, Vector2f, Vector2i, Vector2u};
