//! Two-component vectors.

use std::{
	fmt,
	ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

use serde::{Deserialize, Serialize};

/// Two-component vector used for positions, sizes and texture coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<T> {
	/// Horizontal component
	pub x: T,
	/// Vertical component
	pub y: T,
}

/// Vector of signed integers.
pub type Vector2i = Vector2<i32>;

/// Vector of unsigned integers.
pub type Vector2u = Vector2<u32>;

/// Vector of floats.
pub type Vector2f = Vector2<f32>;

impl<T> Vector2<T> {
	/// Creates a new vector from its components.
	pub const fn new(x: T, y: T) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl Vector2i {
	/// Converts to a float vector.
	pub fn as_f32(self) -> Vector2f {
		Vector2f::new(self.x as f32, self.y as f32)
	}
}

impl Vector2u {
	/// Converts to a float vector.
	pub fn as_f32(self) -> Vector2f {
		Vector2f::new(self.x as f32, self.y as f32)
	}
}

impl<T: Add<Output = T>> Add for Vector2<T> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl<T: AddAssign> AddAssign for Vector2<T> {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl<T: Sub<Output = T>> Sub for Vector2<T> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl<T: SubAssign> SubAssign for Vector2<T> {
	fn sub_assign(&mut self, rhs: Self) {
		self.x -= rhs.x;
		self.y -= rhs.y;
	}
}

impl<T: Neg<Output = T>> Neg for Vector2<T> {
	type Output = Self;

	fn neg(self) -> Self {
		Self::new(-self.x, -self.y)
	}
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2<T> {
	type Output = Self;

	fn mul(self, rhs: T) -> Self {
		Self::new(self.x * rhs, self.y * rhs)
	}
}

impl<T: fmt::Display> fmt::Display for Vector2<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}
