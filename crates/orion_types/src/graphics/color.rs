//! RGBA colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
	/// Alpha channel
	pub a: u8,
}

impl Color {
	/// Opaque black
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	/// Opaque white
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	/// Fully transparent black
	pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

	/// Creates an opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::rgba(r, g, b, 255)
	}

	/// Creates a color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Component-wise multiplication, the way vertex colors tint textures.
	pub fn modulate(self, other: Self) -> Self {
		let mul = |a: u8, b: u8| ((u16::from(a) * u16::from(b)) / 255) as u8;
		Self::rgba(mul(self.r, other.r), mul(self.g, other.g), mul(self.b, other.b), mul(self.a, other.a))
	}

	/// Alpha-blends `self` over `dst`.
	pub fn blend_over(self, dst: Self) -> Self {
		let alpha = u32::from(self.a);
		let inv = 255 - alpha;
		let mix = |src: u8, dst: u8| ((u32::from(src) * alpha + u32::from(dst) * inv) / 255) as u8;
		let out_alpha = alpha + u32::from(dst.a) * inv / 255;
		Self::rgba(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b), out_alpha.min(255) as u8)
	}

	/// Returns the channels as an array.
	pub fn to_array(self) -> [u8; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::WHITE
	}
}

impl From<[u8; 4]> for Color {
	fn from(value: [u8; 4]) -> Self {
		Self::rgba(value[0], value[1], value[2], value[3])
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
	}
}
