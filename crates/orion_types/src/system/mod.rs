//! Time strings and code point classification.

pub mod time_string;
pub mod unicode;

pub use unicode::Key;
