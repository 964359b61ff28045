//! Prelude module for `orion_shell`.

#[doc(inline)]
pub use crate::{
	app::Orion,
	error::ShellError,
	headless::HeadlessWindow,
	manifest::FrameManifest,
	settings::Settings,
	textfield::Textfield,
	window::{Event, Window},
};
