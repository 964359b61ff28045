//! Affine transforms and the transformable component shared by drawables.

use std::ops::Mul;

use super::{FloatRect, Vector2f};

/// 3×3 affine transform matrix.
///
/// The bottom row is always `0 0 1` and is not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
	matrix: [[f32; 3]; 2],
}

impl Transform {
	/// The identity transform.
	pub const IDENTITY: Self = Self {
		matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
	};

	/// Creates a transform from its six significant coefficients.
	///
	/// ```text
	/// | a00 a01 a02 |
	/// | a10 a11 a12 |
	/// |  0   0   1  |
	/// ```
	pub const fn new(a00: f32, a01: f32, a02: f32, a10: f32, a11: f32, a12: f32) -> Self {
		Self {
			matrix: [[a00, a01, a02], [a10, a11, a12]],
		}
	}

	/// Creates a pure translation.
	pub fn translation(offset: Vector2f) -> Self {
		Self::new(1.0, 0.0, offset.x, 0.0, 1.0, offset.y)
	}

	/// Creates a pure scale around the origin.
	pub fn scaling(factors: Vector2f) -> Self {
		Self::new(factors.x, 0.0, 0.0, 0.0, factors.y, 0.0)
	}

	/// Returns `self * other`, i.e. `other` is applied first.
	pub fn combine(&self, other: &Self) -> Self {
		let a = &self.matrix;
		let b = &other.matrix;
		Self::new(
			a[0][0] * b[0][0] + a[0][1] * b[1][0],
			a[0][0] * b[0][1] + a[0][1] * b[1][1],
			a[0][0] * b[0][2] + a[0][1] * b[1][2] + a[0][2],
			a[1][0] * b[0][0] + a[1][1] * b[1][0],
			a[1][0] * b[0][1] + a[1][1] * b[1][1],
			a[1][0] * b[0][2] + a[1][1] * b[1][2] + a[1][2],
		)
	}

	/// Applies the transform to a point.
	pub fn transform_point(&self, point: Vector2f) -> Vector2f {
		let m = &self.matrix;
		Vector2f::new(
			m[0][0] * point.x + m[0][1] * point.y + m[0][2],
			m[1][0] * point.x + m[1][1] * point.y + m[1][2],
		)
	}

	/// Applies the transform to a rectangle.
	///
	/// Since the result has to be axis-aligned, this is the bounding box of the
	/// four transformed corners, which may be larger than the rotated shape.
	pub fn transform_rect(&self, rect: &FloatRect) -> FloatRect {
		let corners = [
			self.transform_point(Vector2f::new(rect.left, rect.top)),
			self.transform_point(Vector2f::new(rect.left, rect.top + rect.height)),
			self.transform_point(Vector2f::new(rect.left + rect.width, rect.top)),
			self.transform_point(Vector2f::new(rect.left + rect.width, rect.top + rect.height)),
		];

		let mut left = corners[0].x;
		let mut top = corners[0].y;
		let mut right = corners[0].x;
		let mut bottom = corners[0].y;
		for corner in &corners[1..] {
			left = left.min(corner.x);
			top = top.min(corner.y);
			right = right.max(corner.x);
			bottom = bottom.max(corner.y);
		}

		FloatRect::new(left, top, right - left, bottom - top)
	}

	/// Returns the inverse transform, or the identity if the matrix is singular.
	pub fn inverse(&self) -> Self {
		let m = &self.matrix;
		let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
		if det == 0.0 {
			return Self::IDENTITY;
		}

		Self::new(
			m[1][1] / det,
			-m[0][1] / det,
			(m[0][1] * m[1][2] - m[1][1] * m[0][2]) / det,
			-m[1][0] / det,
			m[0][0] / det,
			(m[1][0] * m[0][2] - m[0][0] * m[1][2]) / det,
		)
	}
}

impl Default for Transform {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Mul for Transform {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		self.combine(&rhs)
	}
}

/// Position, rotation, scale and origin of a drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformable {
	position: Vector2f,
	rotation: f32,
	scale: Vector2f,
	origin: Vector2f,
}

impl Default for Transformable {
	fn default() -> Self {
		Self {
			position: Vector2f::default(),
			rotation: 0.0,
			scale: Vector2f::new(1.0, 1.0),
			origin: Vector2f::default(),
		}
	}
}

impl Transformable {
	/// Creates an untransformed component.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the absolute position.
	pub fn set_position(&mut self, position: Vector2f) {
		self.position = position;
	}

	/// Moves by the given offset.
	pub fn move_by(&mut self, offset: Vector2f) {
		self.position += offset;
	}

	/// Sets the rotation in degrees, normalised into `[0, 360)`.
	pub fn set_rotation(&mut self, degrees: f32) {
		self.rotation = degrees.rem_euclid(360.0);
	}

	/// Sets the scale factors.
	pub fn set_scale(&mut self, scale: Vector2f) {
		self.scale = scale;
	}

	/// Sets the local origin of all transformations.
	pub fn set_origin(&mut self, origin: Vector2f) {
		self.origin = origin;
	}

	/// Returns the position.
	pub fn position(&self) -> Vector2f {
		self.position
	}

	/// Returns the rotation in degrees.
	pub fn rotation(&self) -> f32 {
		self.rotation
	}

	/// Returns the scale factors.
	pub fn scale(&self) -> Vector2f {
		self.scale
	}

	/// Returns the origin.
	pub fn origin(&self) -> Vector2f {
		self.origin
	}

	/// Computes the combined transform: origin, then scale and rotation, then position.
	pub fn transform(&self) -> Transform {
		let angle = -self.rotation.to_radians();
		let cosine = angle.cos();
		let sine = angle.sin();
		let sxc = self.scale.x * cosine;
		let syc = self.scale.y * cosine;
		let sxs = self.scale.x * sine;
		let sys = self.scale.y * sine;
		let tx = -self.origin.x * sxc - self.origin.y * sys + self.position.x;
		let ty = self.origin.x * sxs - self.origin.y * syc + self.position.y;

		Transform::new(sxc, sys, tx, -sxs, syc, ty)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: f32, b: f32) -> bool {
		(a - b).abs() < 1e-4
	}

	#[test]
	fn test_translation_and_scale() {
		let mut t = Transformable::new();
		t.set_position(Vector2f::new(10.0, 20.0));
		t.set_scale(Vector2f::new(2.0, 3.0));

		let p = t.transform().transform_point(Vector2f::new(1.0, 1.0));
		assert!(approx(p.x, 12.0));
		assert!(approx(p.y, 23.0));
	}

	#[test]
	fn test_rotation_bounding_box() {
		let mut t = Transformable::new();
		t.set_rotation(90.0);

		let rect = t.transform().transform_rect(&FloatRect::new(0.0, 0.0, 10.0, 20.0));
		assert!(approx(rect.width, 20.0));
		assert!(approx(rect.height, 10.0));
	}

	#[test]
	fn test_inverse_round_trip() {
		let mut t = Transformable::new();
		t.set_position(Vector2f::new(5.0, -3.0));
		t.set_rotation(30.0);
		t.set_scale(Vector2f::new(1.5, 0.5));

		let transform = t.transform();
		let point = Vector2f::new(7.0, 11.0);
		let back = transform.inverse().transform_point(transform.transform_point(point));
		assert!(approx(back.x, point.x));
		assert!(approx(back.y, point.y));
	}

	#[test]
	fn test_rotation_normalised() {
		let mut t = Transformable::new();
		t.set_rotation(-90.0);
		assert!(approx(t.rotation(), 270.0));
	}
}
