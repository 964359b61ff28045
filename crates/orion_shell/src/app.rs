//! The Orion application.
//!
//! Orion shows Wymon, an animated sprite, next to a clock and the date, above
//! a text field:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            ┌───────┐                         │
//! │            │ wymon │   12:34:56              │
//! │            └───────┘   Monday, 01.01.2024    │
//! │                                              │
//! │  ┌ text field ───────────────────────────┐   │
//! │  └───────────────────────────────────────┘   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! [`Orion::run`] loads the resources, lays out the scene and then polls,
//! updates and draws until the window is closed.

use std::{fmt::Display, time::Instant};

use chrono::{DateTime, Local, TimeZone};
use log::{debug, error, info, warn};
use orion_types::{
	geometry::{FloatRect, IntRect, Vector2f, Vector2u},
	graphics::{
		Animation, Color, Drawable, FontHandle, FrameRegistry, RenderStates, Sprite, Text, Texturable, TextureManager,
	},
	system::time_string,
};
use orion_vfs::ResourceDir;

use crate::{
	error::ShellError,
	manifest::FrameManifest,
	settings::Settings,
	textfield::{BORDER, MARGIN, Textfield},
	window::{Event, Window},
};

/// Font of every text.
pub const FONT_FILE: &str = "NotoSerif-Regular.ttf";

/// Background image, stretched over the desktop.
pub const BACKGROUND_FILE: &str = "background.jpg";

/// Wymon sprite sheet.
pub const SPRITE_SHEET_FILE: &str = "wymon.png";

/// Optional frame layout of the sprite sheet.
pub const MANIFEST_FILE: &str = "wymon.json";

/// Window icon.
pub const ICON_FILE: &str = "wymonIcon.png";

/// Horizontal gap between Wymon and the clock.
const ELEMENT_SPACING: f32 = 20.0;

/// Application state.
pub struct Orion<W: Window> {
	window: W,
	settings: Settings,
	resources: ResourceDir,
	frames: FrameRegistry,
	textures: TextureManager,
	font: Option<FontHandle>,
	background: Sprite,
	wymon: Animation,
	time: Text,
	date: Text,
	textfield: Textfield,
	last_tick: Option<Instant>,
}

impl<W: Window> Orion<W> {
	/// Creates the application for `window`. Nothing is loaded yet.
	pub fn new(window: W, settings: Settings) -> Self {
		let mut frames = FrameRegistry::new();
		let wymon = Animation::new(&mut frames);

		let mut time = Text::default();
		time.set_character_size(settings.time_size);
		let mut date = Text::default();
		date.set_character_size(settings.date_size);

		Self {
			resources: ResourceDir::new(&settings.resources),
			textfield: Textfield::new(settings.history, settings.char_size),
			window,
			settings,
			frames,
			textures: TextureManager::new(),
			font: None,
			background: Sprite::new(),
			wymon,
			time,
			date,
			last_tick: None,
		}
	}

	/// Sets the window icon from an image in the resource directory.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or decoded.
	pub fn set_window_icon(&mut self, relative: &str) -> Result<(), ShellError> {
		let data = self.resources.read(relative)?;
		let icon = image::load_from_memory(&data)?.to_rgba8();
		self.window.set_icon(&icon);
		debug!("Window icon set from {}", relative);
		Ok(())
	}

	/// Loads the font, the background and the Wymon sprite sheet.
	///
	/// The sprite sheet frames come from [`MANIFEST_FILE`] if it exists and
	/// from the built-in layout otherwise.
	///
	/// # Errors
	///
	/// Returns the first resource that cannot be read or decoded.
	pub fn load_resources(&mut self) -> Result<(), ShellError> {
		let font_data = self.resources.read(FONT_FILE)?;
		let font = self.window.load_font(&font_data)?;
		self.textfield.set_font(&font);
		self.time.set_font(FontHandle::clone(&font));
		self.date.set_font(FontHandle::clone(&font));
		self.font = Some(font);

		let background = self.resources.read(BACKGROUND_FILE)?;
		self.background.load_from_memory(
			&mut self.textures,
			"background",
			&background,
			IntRect::default(),
			IntRect::default(),
		)?;
		let desktop = self.window.desktop_size().as_f32();
		let size = self.background.object_size();
		if size.x > 0.0 && size.y > 0.0 {
			self.background.set_scale(Vector2f::new(desktop.x / size.x, desktop.y / size.y));
		}

		let manifest = self.load_manifest()?;
		let sheet = self.resources.read(SPRITE_SHEET_FILE)?;
		self.wymon.load_from_memory(&mut self.textures, "wymon", &sheet, manifest.display_rect(), IntRect::default())?;
		let inserted = manifest.apply(&mut self.wymon);
		info!("Loaded {} Wymon frames", inserted);

		self.textfield.draw_box(self.window.size());
		self.time.set_string(&time_string::now(time_string::TIME));
		self.date.set_string(&time_string::now(time_string::DATE));
		Ok(())
	}

	fn load_manifest(&self) -> Result<FrameManifest, ShellError> {
		if !self.resources.exists(MANIFEST_FILE) {
			return Ok(FrameManifest::wymon());
		}

		let text = self.resources.read_to_string(MANIFEST_FILE)?;
		FrameManifest::from_json(&text).map_err(|source| ShellError::Manifest {
			path: self.resources.root().join(MANIFEST_FILE),
			source,
		})
	}

	/// Places every element for the current window size.
	///
	/// Wymon and the clock are centered as a group in the upper part of the
	/// window, the date sits below the clock and the text field is anchored
	/// to the bottom.
	pub fn layout(&mut self) {
		let render = self.window.size();
		let wymon = self.wymon.maximum_frame_size();
		let time = self.time.size();
		let date = self.date.size();

		let group_width = wymon.x + ELEMENT_SPACING + time.x.max(date.x);
		let wymon_position = Vector2f::new((render.x / 2) as f32 - group_width / 2.0, (render.y / 10) as f32);
		self.wymon.set_position(wymon_position);

		let time_position = Vector2f::new(
			wymon_position.x + wymon.x + ELEMENT_SPACING,
			wymon_position.y + wymon.y / 2.0 - time.y / 2.0,
		);
		self.time.set_position(time_position);
		self.date.set_position(Vector2f::new(time_position.x, time_position.y + time.y + date.y));

		let field = self.textfield.size();
		self.textfield.set_position(Vector2f::new(
			render.x as f32 / 2.0 - field.x / 2.0,
			render.y as f32 - field.y - BORDER - MARGIN,
		));
	}

	/// Handles every pending event.
	pub fn process_events(&mut self) {
		while let Some(event) = self.window.poll_event() {
			match event {
				Event::Closed => self.window.close(),
				Event::TextEntered(key) => self.textfield.put_char(key),
				Event::Resized {
					width,
					height,
				} => {
					debug!("Resized to {}×{}", width, height);
					self.window.set_view(FloatRect::new(0.0, 0.0, width as f32, height as f32));
					self.textfield.draw_box(Vector2u::new(width, height));
					self.layout();
				}
			}
		}
	}

	/// Refreshes the clock and advances Wymon once per interval.
	///
	/// The first call only starts the interval.
	pub fn update<Tz>(&mut self, now: Instant, time: &DateTime<Tz>)
	where
		Tz: TimeZone,
		Tz::Offset: Display,
	{
		let clock = time_string::format(time_string::TIME, time);
		if clock != self.time.string() {
			self.time.set_string(&clock);
			if clock == time_string::NEW_DATE {
				self.date.set_string(&time_string::format(time_string::DATE, time));
			}
		}

		match self.last_tick {
			Some(last) if now.saturating_duration_since(last) >= self.settings.interval() => {
				self.wymon.advance();
				self.last_tick = Some(now);
			}
			Some(_) => {}
			None => self.last_tick = Some(now),
		}
	}

	/// Draws the scene and presents it.
	pub fn draw_all(&mut self) {
		let states = RenderStates::default();
		self.window.clear(Color::BLACK);
		self.background.draw(&mut self.window, &states);
		self.time.draw(&mut self.window, &states);
		self.wymon.draw(&mut self.window, &states);
		self.date.draw(&mut self.window, &states);
		self.textfield.draw(&mut self.window, &states);
		self.window.display();
	}

	/// Runs the application until the window is closed.
	///
	/// A missing icon is not fatal.
	///
	/// # Errors
	///
	/// Returns an error if the font, the background or the sprite sheet
	/// cannot be loaded.
	pub fn run(&mut self) -> Result<(), ShellError> {
		if let Err(e) = self.set_window_icon(ICON_FILE) {
			warn!("Cannot set window icon: {}", e);
		}
		if let Err(e) = self.load_resources() {
			error!("Cannot load resources from {}: {}", self.resources.root().display(), e);
			return Err(e);
		}
		self.layout();

		while self.window.is_open() {
			self.process_events();
			if !self.window.is_open() {
				break;
			}
			self.update(Instant::now(), &Local::now());
			self.draw_all();
		}

		let released = self.frames.compact();
		debug!("Released {} frame stores", released);
		Ok(())
	}

	/// Returns the window.
	pub fn window(&self) -> &W {
		&self.window
	}

	/// Returns the window mutably.
	pub fn window_mut(&mut self) -> &mut W {
		&mut self.window
	}

	/// Returns the effective settings.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// Returns the text field.
	pub fn textfield(&self) -> &Textfield {
		&self.textfield
	}

	/// Returns the Wymon animation.
	pub fn wymon(&self) -> &Animation {
		&self.wymon
	}

	/// Returns the clock text.
	pub fn time_text(&self) -> &Text {
		&self.time
	}

	/// Returns the date text.
	pub fn date_text(&self) -> &Text {
		&self.date
	}

	/// Returns the background sprite.
	pub fn background(&self) -> &Sprite {
		&self.background
	}

	/// Returns the loaded textures.
	pub fn textures(&self) -> &TextureManager {
		&self.textures
	}

	/// Consumes the application and returns the window.
	pub fn into_window(self) -> W {
		self.window
	}
}
