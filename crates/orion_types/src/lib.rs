//! Core types of the `orion` project.
//!
//! # Modules
//!
//! - **geometry**: Vectors, rectangles and affine transforms
//! - **graphics**: Frames and the shared frame repository, textures and the
//!   texture manager, and the drawables built on them (sprite, animation,
//!   text, rectangle shape)
//! - **system**: Time strings and code point classification
//!
//! Drawing goes through the [`graphics::RenderTarget`] trait; this crate never
//! talks to a window itself.
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use orion_types::prelude::*;
//!
//! let mut registry = FrameRegistry::new();
//! let mut animation = Animation::new(&mut registry);
//! animation.insert_group(&FrameGroup::new(0, 0, 64, 32, 32, 16), None);
//! assert_eq!(animation.frame_count(), 4);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use orion_types::system::time_string;
//!
//! assert_eq!(time_string::NEW_DATE, "00:00:00");
//! ```

pub mod error;
pub mod geometry;
pub mod graphics;
pub mod system;

/// `use orion_types::prelude::*;` to import commonly used items.
pub mod prelude;
