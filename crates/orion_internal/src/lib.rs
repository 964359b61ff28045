//! This module is separated into its own crate to enable simple dynamic linking for `orion`, and should not be used directly.

/// `use orion::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use orion_shell;
pub use orion_types;
pub use orion_vfs;

// Re-export commonly used types at crate root
pub use orion_shell::{HeadlessWindow, Orion, ShellError, settings::Settings};
pub use orion_types::{error::OrionError, graphics::Animation};
pub use orion_vfs::{ResourceDir, VfsError};
