//! Scratch resource directories

use std::{
	fs,
	path::{Path, PathBuf},
};

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use orion::prelude::*;

/// Resource directory removed on drop.
pub(super) struct Resources {
	root: PathBuf,
}

impl Resources {
	/// Writes the files Orion needs: a font, a background, the Wymon sheet and the icon.
	pub(super) fn new(name: &str) -> Self {
		let root = std::env::temp_dir().join(format!("orion_it_{}_{}", name, std::process::id()));
		let _ = fs::remove_dir_all(&root);
		fs::create_dir_all(&root).unwrap();

		fs::write(root.join("NotoSerif-Regular.ttf"), b"not a real font").unwrap();
		RgbImage::from_pixel(32, 18, Rgb([20, 40, 60])).save(root.join("background.jpg")).unwrap();

		// Left frame green, right frame blue, one pixel column between.
		let sheet = RgbaImage::from_fn(215, 96, |x, _| match x {
			0..106 => Rgba([0, 255, 0, 255]),
			106 => Rgba([0, 0, 0, 0]),
			_ => Rgba([0, 0, 255, 255]),
		});
		sheet.save(root.join("wymon.png")).unwrap();
		RgbaImage::from_pixel(32, 32, Rgba([255, 255, 0, 255])).save(root.join("wymonIcon.png")).unwrap();

		Self {
			root,
		}
	}

	pub(super) fn root(&self) -> &Path {
		&self.root
	}

	pub(super) fn remove(&self, relative: &str) {
		fs::remove_file(self.root.join(relative)).unwrap();
	}

	pub(super) fn settings(&self) -> Settings {
		Settings {
			resources: self.root.clone(),
			..Settings::default()
		}
	}
}

impl Drop for Resources {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.root);
	}
}
