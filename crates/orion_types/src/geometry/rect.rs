//! Axis-aligned rectangles.

use std::{
	fmt,
	ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

use super::Vector2;

/// Axis-aligned rectangle given by its top-left corner and its size.
///
/// The default rectangle (all components zero) doubles as the "no rectangle"
/// marker throughout the crate, see [`Rect::is_empty`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect<T> {
	/// Left coordinate
	pub left: T,
	/// Top coordinate
	pub top: T,
	/// Width, may be negative
	pub width: T,
	/// Height, may be negative
	pub height: T,
}

/// Rectangle with integer coordinates, used for texture areas.
pub type IntRect = Rect<i32>;

/// Rectangle with float coordinates, used for bounds.
pub type FloatRect = Rect<f32>;

fn min<T: PartialOrd>(a: T, b: T) -> T {
	if b < a {
		b
	} else {
		a
	}
}

fn max<T: PartialOrd>(a: T, b: T) -> T {
	if a < b {
		b
	} else {
		a
	}
}

impl<T> Rect<T> {
	/// Creates a rectangle from its components.
	pub const fn new(left: T, top: T, width: T, height: T) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}
}

impl<T: Copy> Rect<T> {
	/// Creates a rectangle from a position and a size.
	pub fn from_vectors(position: Vector2<T>, size: Vector2<T>) -> Self {
		Self::new(position.x, position.y, size.x, size.y)
	}

	/// Returns the top-left corner.
	pub fn position(&self) -> Vector2<T> {
		Vector2::new(self.left, self.top)
	}

	/// Returns the size.
	pub fn size(&self) -> Vector2<T> {
		Vector2::new(self.width, self.height)
	}
}

impl<T> Rect<T>
where
	T: Copy + Default + PartialEq + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
	/// Returns `true` if this is the default rectangle.
	///
	/// A zero-sized rectangle at a non-zero position is *not* empty in this
	/// sense; only the all-zero rectangle means "no rectangle set".
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// Returns `true` if the point lies inside the rectangle.
	///
	/// The right and bottom edges are exclusive.
	pub fn contains(&self, point: Vector2<T>) -> bool {
		let (left, right) = self.horizontal_span();
		let (top, bottom) = self.vertical_span();
		point.x >= left && point.x < right && point.y >= top && point.y < bottom
	}

	/// Computes the overlapping area of two rectangles.
	///
	/// Rectangles with negative sizes are normalised first. Returns `None` if
	/// the rectangles do not overlap or only touch at an edge.
	///
	/// # Examples
	///
	/// ```
	/// use orion_types::geometry::IntRect;
	///
	/// let a = IntRect::new(0, 0, 10, 10);
	/// let b = IntRect::new(5, 5, 10, 10);
	/// assert_eq!(a.intersection(&b), Some(IntRect::new(5, 5, 5, 5)));
	///
	/// let c = IntRect::new(20, 20, 5, 5);
	/// assert_eq!(a.intersection(&c), None);
	/// ```
	pub fn intersection(&self, other: &Self) -> Option<Self> {
		let (l1, r1) = self.horizontal_span();
		let (t1, b1) = self.vertical_span();
		let (l2, r2) = other.horizontal_span();
		let (t2, b2) = other.vertical_span();

		let left = max(l1, l2);
		let top = max(t1, t2);
		let right = min(r1, r2);
		let bottom = min(b1, b2);

		if left < right && top < bottom {
			Some(Self::new(left, top, right - left, bottom - top))
		} else {
			None
		}
	}

	fn horizontal_span(&self) -> (T, T) {
		let end = self.left + self.width;
		(min(self.left, end), max(self.left, end))
	}

	fn vertical_span(&self) -> (T, T) {
		let end = self.top + self.height;
		(min(self.top, end), max(self.top, end))
	}
}

impl IntRect {
	/// Converts to a float rectangle.
	pub fn as_f32(&self) -> FloatRect {
		FloatRect::new(self.left as f32, self.top as f32, self.width as f32, self.height as f32)
	}
}

impl<T: fmt::Display> fmt::Display for Rect<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}, {}; {}×{}]", self.left, self.top, self.width, self.height)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_empty() {
		assert!(IntRect::default().is_empty());
		assert!(!IntRect::new(1, 0, 0, 0).is_empty());
	}

	#[test]
	fn test_intersection_contained() {
		let outer = IntRect::new(0, 0, 100, 100);
		let inner = IntRect::new(10, 20, 30, 40);
		assert_eq!(outer.intersection(&inner), Some(inner));
		assert_eq!(inner.intersection(&outer), Some(inner));
	}

	#[test]
	fn test_intersection_touching_edges() {
		let a = IntRect::new(0, 0, 10, 10);
		let b = IntRect::new(10, 0, 10, 10);
		assert_eq!(a.intersection(&b), None);
	}

	#[test]
	fn test_intersection_negative_size() {
		let a = IntRect::new(10, 10, -10, -10);
		let b = IntRect::new(5, 5, 10, 10);
		assert_eq!(a.intersection(&b), Some(IntRect::new(5, 5, 5, 5)));
	}

	#[test]
	fn test_contains() {
		let rect = FloatRect::new(0.0, 0.0, 2.0, 2.0);
		assert!(rect.contains(Vector2::new(0.0, 0.0)));
		assert!(rect.contains(Vector2::new(1.5, 1.9)));
		assert!(!rect.contains(Vector2::new(2.0, 1.0)));
	}
}
