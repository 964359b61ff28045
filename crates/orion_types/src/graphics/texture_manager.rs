//! Keyed texture store.
//!
//! Drawables only hold a [`TextureHandle`]. The manager owns the keyed table
//! so textures can be looked up, shared between drawables and replaced in
//! place. Textures nobody uses any more are removed by
//! [`TextureManager::purge_unused`].

use std::{
	collections::HashMap,
	io::{BufRead, Seek},
	path::Path,
	rc::Rc,
};

use image::DynamicImage;
use log::{debug, warn};

use crate::{error::OrionError, geometry::IntRect};

use super::{Texture, TextureHandle};

/// Table of textures addressed by string keys.
#[derive(Debug, Default)]
pub struct TextureManager {
	textures: HashMap<String, TextureHandle>,
}

impl TextureManager {
	/// Creates an empty manager.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a texture from a file and registers it under `key`.
	///
	/// # Errors
	///
	/// Returns [`OrionError::TextureKeyTaken`] if `key` is in use, or the
	/// loading error. Nothing is registered on failure.
	pub fn load_from_file(&mut self, key: &str, path: impl AsRef<Path>, area: &IntRect) -> Result<TextureHandle, OrionError> {
		self.ensure_free(key)?;
		let path = path.as_ref();
		let texture = Texture::from_file(path, area).inspect_err(|e| {
			warn!("Cannot load texture {:?} from {}: {}", key, path.display(), e);
		})?;
		Ok(self.register(key, texture))
	}

	/// Decodes a texture from memory and registers it under `key`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	pub fn load_from_memory(&mut self, key: &str, data: &[u8], area: &IntRect) -> Result<TextureHandle, OrionError> {
		self.ensure_free(key)?;
		let texture = Texture::from_memory(data, area)?;
		Ok(self.register(key, texture))
	}

	/// Decodes a texture from a stream and registers it under `key`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	pub fn load_from_reader<R: BufRead + Seek>(&mut self, key: &str, reader: R, area: &IntRect) -> Result<TextureHandle, OrionError> {
		self.ensure_free(key)?;
		let texture = Texture::from_reader(reader, area)?;
		Ok(self.register(key, texture))
	}

	/// Creates a texture from an image and registers it under `key`.
	///
	/// # Errors
	///
	/// See [`load_from_file`](Self::load_from_file).
	pub fn load_from_image(&mut self, key: &str, image: &DynamicImage, area: &IntRect) -> Result<TextureHandle, OrionError> {
		self.ensure_free(key)?;
		let texture = Texture::from_image(image, area)?;
		Ok(self.register(key, texture))
	}

	/// Replaces the texture under `key` with one loaded from a file.
	///
	/// All holders of the texture see the new pixels.
	///
	/// # Errors
	///
	/// Returns [`OrionError::TextureKeyMissing`] if `key` is unknown, or the
	/// loading error. The old texture is kept on failure.
	pub fn replace_from_file(&mut self, key: &str, path: impl AsRef<Path>, area: &IntRect) -> Result<(), OrionError> {
		let handle = self.existing(key)?;
		*handle.borrow_mut() = Texture::from_file(path, area)?;
		Ok(())
	}

	/// Replaces the texture under `key` with one decoded from memory.
	///
	/// # Errors
	///
	/// See [`replace_from_file`](Self::replace_from_file).
	pub fn replace_from_memory(&mut self, key: &str, data: &[u8], area: &IntRect) -> Result<(), OrionError> {
		let handle = self.existing(key)?;
		*handle.borrow_mut() = Texture::from_memory(data, area)?;
		Ok(())
	}

	/// Replaces the texture under `key` with one decoded from a stream.
	///
	/// # Errors
	///
	/// See [`replace_from_file`](Self::replace_from_file).
	pub fn replace_from_reader<R: BufRead + Seek>(&mut self, key: &str, reader: R, area: &IntRect) -> Result<(), OrionError> {
		let handle = self.existing(key)?;
		*handle.borrow_mut() = Texture::from_reader(reader, area)?;
		Ok(())
	}

	/// Replaces the texture under `key` with one created from an image.
	///
	/// # Errors
	///
	/// See [`replace_from_file`](Self::replace_from_file).
	pub fn replace_from_image(&mut self, key: &str, image: &DynamicImage, area: &IntRect) -> Result<(), OrionError> {
		let handle = self.existing(key)?;
		*handle.borrow_mut() = Texture::from_image(image, area)?;
		Ok(())
	}

	/// Returns the texture registered under `key`.
	pub fn get(&self, key: &str) -> Option<TextureHandle> {
		self.textures.get(key).cloned()
	}

	/// Returns `true` if `key` is in use.
	pub fn contains(&self, key: &str) -> bool {
		self.textures.contains_key(key)
	}

	/// Number of registered textures.
	pub fn len(&self) -> usize {
		self.textures.len()
	}

	/// Returns `true` if no textures are registered.
	pub fn is_empty(&self) -> bool {
		self.textures.is_empty()
	}

	/// Drops every texture only the manager still refers to.
	///
	/// Returns the number of removed textures.
	pub fn purge_unused(&mut self) -> usize {
		let before = self.textures.len();
		self.textures.retain(|_, handle| Rc::strong_count(handle) > 1);
		let removed = before - self.textures.len();
		if removed > 0 {
			debug!("Purged {} unused textures, {} remaining", removed, self.textures.len());
		}
		removed
	}

	fn ensure_free(&self, key: &str) -> Result<(), OrionError> {
		if self.contains(key) {
			Err(OrionError::TextureKeyTaken(key.to_string()))
		} else {
			Ok(())
		}
	}

	fn existing(&self, key: &str) -> Result<TextureHandle, OrionError> {
		self.get(key).ok_or_else(|| OrionError::TextureKeyMissing(key.to_string()))
	}

	fn register(&mut self, key: &str, texture: Texture) -> TextureHandle {
		let handle = texture.into_handle();
		self.textures.insert(key.to_string(), Rc::clone(&handle));
		handle
	}
}
