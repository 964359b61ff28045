//! Prelude module for `orion_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use orion_internal::prelude::*;
//!
//! let mut registry = FrameRegistry::new();
//! let mut wymon = Animation::new(&mut registry);
//! FrameManifest::wymon().apply(&mut wymon);
//! assert_eq!(wymon.frame_count(), 2);
//!
//! let resources = ResourceDir::default();
//! assert!(resources.path("../outside").is_err());
//! ```

// Re-export everything from the member preludes
#[doc(inline)]
pub use orion_shell::prelude::*;
#[doc(inline)]
pub use orion_types::prelude::*;
#[doc(inline)]
pub use orion_vfs::{ResourceDir, VfsError};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use orion_shell;
#[doc(inline)]
pub use orion_types;
#[doc(inline)]
pub use orion_vfs;
