//! The Orion application shell.
//!
//! Ties the types of `orion_types` into the running program: a window seam,
//! the text field, the frame manifest, settings and the render loop.
//!
//! # Modules
//!
//! - **app**: [`Orion`], resource loading, layout and the main loop
//! - **window**: The [`Window`] trait and its [`Event`]s
//! - **headless**: [`HeadlessWindow`], a software window rendering to memory
//! - **textfield**: Text input with a short history
//! - **manifest**: JSON frame layout of a sprite sheet
//! - **settings**: Flags and environment variables
//!
//! # Examples
//!
//! ```no_run
//! use orion_shell::prelude::*;
//!
//! let settings = Settings::default();
//! let window = HeadlessWindow::new(settings.width, settings.height, &settings.title)?.with_frame_budget(60);
//! let mut orion = Orion::new(window, settings);
//! orion.run()?;
//! orion.window().snapshot("orion.png")?;
//! # Ok::<(), ShellError>(())
//! ```

pub mod app;
pub mod error;
pub mod headless;
pub mod manifest;
pub mod settings;
pub mod textfield;
pub mod window;

/// `use orion_shell::prelude::*;` to import commonly used items.
pub mod prelude;

pub use app::Orion;
pub use error::ShellError;
pub use headless::HeadlessWindow;
pub use window::{Event, Window};
