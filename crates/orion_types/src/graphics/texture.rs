//! CPU-side textures decoded with the `image` crate.

use std::{
	cell::RefCell,
	io::{BufRead, Cursor, Seek},
	path::Path,
	rc::Rc,
};

use image::{DynamicImage, ImageReader, RgbaImage};

use crate::{
	error::OrionError,
	geometry::{IntRect, Vector2u},
};

use super::Color;

/// Shared, replaceable texture.
///
/// Every drawable using a texture holds one of these. Replacing the texture
/// through the [`TextureManager`](super::TextureManager) is visible to all of
/// them.
pub type TextureHandle = Rc<RefCell<Texture>>;

/// RGBA pixel data that drawables sample from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
	pixels: RgbaImage,
}

impl Texture {
	/// Creates a texture filled with one color.
	pub fn solid(width: u32, height: u32, color: Color) -> Self {
		Self {
			pixels: RgbaImage::from_pixel(width, height, image::Rgba(color.to_array())),
		}
	}

	/// Wraps existing pixel data.
	pub fn from_pixels(pixels: RgbaImage) -> Self {
		Self {
			pixels,
		}
	}

	/// Loads an image file.
	///
	/// `area` selects a sub-rectangle to load; the default rectangle loads the
	/// whole image.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or decoded, or if `area`
	/// lies outside the image.
	pub fn from_file(path: impl AsRef<Path>, area: &IntRect) -> Result<Self, OrionError> {
		let image = ImageReader::open(path.as_ref())?.with_guessed_format()?.decode()?;
		Self::from_image(&image, area)
	}

	/// Decodes an image file held in memory.
	///
	/// # Errors
	///
	/// See [`from_file`](Self::from_file).
	pub fn from_memory(data: &[u8], area: &IntRect) -> Result<Self, OrionError> {
		Self::from_reader(Cursor::new(data), area)
	}

	/// Decodes an image from a seekable stream.
	///
	/// # Errors
	///
	/// See [`from_file`](Self::from_file).
	pub fn from_reader<R: BufRead + Seek>(reader: R, area: &IntRect) -> Result<Self, OrionError> {
		let image = ImageReader::new(reader).with_guessed_format()?.decode()?;
		Self::from_image(&image, area)
	}

	/// Creates a texture from a decoded image.
	///
	/// The area is clamped to the image bounds.
	///
	/// # Errors
	///
	/// Returns [`OrionError::InvalidArea`] if the clamped area is empty.
	pub fn from_image(image: &DynamicImage, area: &IntRect) -> Result<Self, OrionError> {
		let rgba = image.to_rgba8();
		if area.is_empty() {
			return Ok(Self::from_pixels(rgba));
		}

		let (width, height) = rgba.dimensions();
		let bounds = IntRect::new(0, 0, width as i32, height as i32);
		let Some(clamped) = bounds.intersection(area) else {
			return Err(OrionError::InvalidArea {
				area: *area,
				width,
				height,
			});
		};

		let cropped = image::imageops::crop_imm(
			&rgba,
			clamped.left as u32,
			clamped.top as u32,
			clamped.width as u32,
			clamped.height as u32,
		)
		.to_image();
		Ok(Self::from_pixels(cropped))
	}

	/// Wraps the texture in a shared handle.
	pub fn into_handle(self) -> TextureHandle {
		Rc::new(RefCell::new(self))
	}

	/// Returns the size in pixels.
	pub fn size(&self) -> Vector2u {
		let (w, h) = self.pixels.dimensions();
		Vector2u::new(w, h)
	}

	/// Returns the pixel at `(x, y)`, or `None` outside the texture.
	pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
		self.pixels.get_pixel_checked(x, y).map(|p| Color::from(p.0))
	}

	/// Returns the underlying image.
	pub fn image(&self) -> &RgbaImage {
		&self.pixels
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn checker() -> DynamicImage {
		let mut img = RgbaImage::new(4, 4);
		for (x, y, p) in img.enumerate_pixels_mut() {
			*p = image::Rgba([x as u8, y as u8, 0, 255]);
		}
		DynamicImage::ImageRgba8(img)
	}

	#[test]
	fn test_from_image_whole() {
		let tex = Texture::from_image(&checker(), &IntRect::default()).unwrap();
		assert_eq!(tex.size(), Vector2u::new(4, 4));
	}

	#[test]
	fn test_from_image_area_is_clamped() {
		let tex = Texture::from_image(&checker(), &IntRect::new(2, 1, 10, 2)).unwrap();
		assert_eq!(tex.size(), Vector2u::new(2, 2));
		assert_eq!(tex.pixel(0, 0), Some(Color::rgba(2, 1, 0, 255)));
	}

	#[test]
	fn test_from_image_area_outside() {
		let err = Texture::from_image(&checker(), &IntRect::new(10, 10, 2, 2)).unwrap_err();
		assert!(matches!(err, OrionError::InvalidArea { .. }));
	}

	#[test]
	fn test_from_memory_png() {
		let mut bytes = Vec::new();
		checker().write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png).unwrap();
		let tex = Texture::from_memory(&bytes, &IntRect::default()).unwrap();
		assert_eq!(tex.size(), Vector2u::new(4, 4));
		assert_eq!(tex.pixel(3, 2), Some(Color::rgba(3, 2, 0, 255)));
	}

	#[test]
	fn test_from_memory_garbage() {
		assert!(Texture::from_memory(b"not an image", &IntRect::default()).is_err());
	}
}
