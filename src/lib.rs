#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `orion` shows Wymon, an animated sprite, together with a clock, the date
//! and a small text field.
//!
//! The drawables live in `orion_types`, the application in `orion_shell`.
//! Both are re-exported here; `use orion::prelude::*;` brings in the common
//! items.
//!
pub use orion_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use orion_dylib;
