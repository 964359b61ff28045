//! Software window without a desktop session.
//!
//! [`HeadlessWindow`] rasterizes into an RGBA canvas in memory. Events are
//! queued by the caller, and an optional frame budget closes the window after
//! a number of presented frames, so the shell can run unattended:
//!
//! ```text
//! push_text / resize ──► events ──► poll_event
//! draw_primitives ─────► back buffer ──display──► front buffer ──► snapshot
//! ```

use std::{collections::VecDeque, path::Path};

use image::{Rgba, RgbaImage};
use log::{debug, info};
use orion_types::{
	geometry::{FloatRect, Transform, Vector2f, Vector2u},
	graphics::{Color, FontHandle, MonospaceFont, PrimitiveType, RenderStates, RenderTarget, Texture, Vertex},
	system::Key,
};

use crate::{
	error::ShellError,
	window::{Event, Window},
};

/// Desktop size reported when none is configured.
pub const DEFAULT_DESKTOP: Vector2u = Vector2u::new(1920, 1080);

/// In-memory window.
#[derive(Debug)]
pub struct HeadlessWindow {
	title: String,
	back: RgbaImage,
	front: RgbaImage,
	view: FloatRect,
	desktop: Vector2u,
	events: VecDeque<Event>,
	open: bool,
	frame_budget: Option<usize>,
	presented: usize,
	icon_size: Option<Vector2u>,
}

impl HeadlessWindow {
	/// Creates an open window of the given size.
	///
	/// # Errors
	///
	/// Returns [`ShellError::InvalidWindowSize`] for a zero width or height.
	pub fn new(width: u32, height: u32, title: &str) -> Result<Self, ShellError> {
		if width == 0 || height == 0 {
			return Err(ShellError::InvalidWindowSize {
				width,
				height,
			});
		}

		info!("Opening headless window {:?} ({}×{})", title, width, height);
		Ok(Self {
			title: title.to_string(),
			back: RgbaImage::new(width, height),
			front: RgbaImage::new(width, height),
			view: FloatRect::new(0.0, 0.0, width as f32, height as f32),
			desktop: DEFAULT_DESKTOP,
			events: VecDeque::new(),
			open: true,
			frame_budget: None,
			presented: 0,
			icon_size: None,
		})
	}

	/// Sets the reported desktop size.
	pub fn with_desktop_size(mut self, size: Vector2u) -> Self {
		self.desktop = size;
		self
	}

	/// Closes the window after `frames` presented frames.
	pub fn with_frame_budget(mut self, frames: usize) -> Self {
		self.frame_budget = Some(frames);
		self
	}

	/// Queues an event.
	pub fn push_event(&mut self, event: Event) {
		self.events.push_back(event);
	}

	/// Queues one text event per character.
	pub fn push_text(&mut self, text: &str) {
		for c in text.chars() {
			self.push_event(Event::TextEntered(c as Key));
		}
	}

	/// Resizes the canvas and queues the matching event.
	///
	/// The view is kept; the shell resets it when handling the event.
	///
	/// # Errors
	///
	/// Returns [`ShellError::InvalidWindowSize`] for a zero width or height.
	pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ShellError> {
		if width == 0 || height == 0 {
			return Err(ShellError::InvalidWindowSize {
				width,
				height,
			});
		}

		self.back = RgbaImage::new(width, height);
		self.front = RgbaImage::new(width, height);
		self.push_event(Event::Resized {
			width,
			height,
		});
		Ok(())
	}

	/// Returns the window title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns the last presented frame.
	pub fn frame(&self) -> &RgbaImage {
		&self.front
	}

	/// Number of presented frames.
	pub fn presented(&self) -> usize {
		self.presented
	}

	/// Size of the icon set last, if any.
	pub fn icon_size(&self) -> Option<Vector2u> {
		self.icon_size
	}

	/// Returns the current view.
	pub fn view(&self) -> FloatRect {
		self.view
	}

	/// Writes the last presented frame to an image file.
	///
	/// # Errors
	///
	/// Returns the encoding or IO error.
	pub fn snapshot(&self, path: impl AsRef<Path>) -> Result<(), ShellError> {
		let path = path.as_ref();
		self.front.save(path)?;
		info!("Saved snapshot to {}", path.display());
		Ok(())
	}

	fn view_transform(&self) -> Transform {
		let (width, height) = self.back.dimensions();
		let scale = Vector2f::new(width as f32 / self.view.width, height as f32 / self.view.height);
		Transform::scaling(scale).combine(&Transform::translation(Vector2f::new(-self.view.left, -self.view.top)))
	}
}

impl RenderTarget for HeadlessWindow {
	fn draw_primitives(&mut self, vertices: &[Vertex], primitive: PrimitiveType, states: &RenderStates<'_>) {
		let transform = self.view_transform().combine(&states.transform);
		let project = |v: &Vertex| Vertex {
			position: transform.transform_point(v.position),
			..*v
		};

		match primitive {
			PrimitiveType::Triangles => {
				for tri in vertices.chunks_exact(3) {
					let tri = [project(&tri[0]), project(&tri[1]), project(&tri[2])];
					fill(&mut self.back, &[tri], states.texture);
				}
			}
			PrimitiveType::Quads => {
				for quad in vertices.chunks_exact(4) {
					let [a, b, c, d] = [project(&quad[0]), project(&quad[1]), project(&quad[2]), project(&quad[3])];
					fill(&mut self.back, &[[a, b, c], [a, c, d]], states.texture);
				}
			}
		}
	}
}

impl Window for HeadlessWindow {
	fn poll_event(&mut self) -> Option<Event> {
		self.events.pop_front()
	}

	fn is_open(&self) -> bool {
		self.open
	}

	fn close(&mut self) {
		if self.open {
			debug!("Closing headless window after {} frames", self.presented);
		}
		self.open = false;
	}

	fn clear(&mut self, color: Color) {
		let pixel = Rgba(color.to_array());
		for p in self.back.pixels_mut() {
			*p = pixel;
		}
	}

	fn display(&mut self) {
		self.front.clone_from(&self.back);
		self.presented += 1;
		if self.frame_budget.is_some_and(|budget| self.presented >= budget) {
			self.close();
		}
	}

	fn size(&self) -> Vector2u {
		let (width, height) = self.back.dimensions();
		Vector2u::new(width, height)
	}

	fn set_view(&mut self, view: FloatRect) {
		self.view = view;
	}

	fn set_icon(&mut self, icon: &RgbaImage) {
		let (width, height) = icon.dimensions();
		self.icon_size = Some(Vector2u::new(width, height));
	}

	fn desktop_size(&self) -> Vector2u {
		self.desktop
	}

	fn load_font(&self, data: &[u8]) -> Result<FontHandle, ShellError> {
		if data.is_empty() {
			return Err(ShellError::Font("empty font data".to_string()));
		}
		// Glyph outlines are not rasterized here; only the metrics matter.
		Ok(MonospaceFont::new().into_handle())
	}
}

/// Edge function: twice the signed area of `(a, b, p)`.
fn edge(a: Vector2f, b: Vector2f, p: Vector2f) -> f32 {
	(b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Fills the union of `triangles`, blending every covered pixel once.
fn fill(canvas: &mut RgbaImage, triangles: &[[Vertex; 3]], texture: Option<&Texture>) {
	let (width, height) = canvas.dimensions();
	let mut min = Vector2f::new(f32::MAX, f32::MAX);
	let mut max = Vector2f::new(f32::MIN, f32::MIN);
	for v in triangles.iter().flatten() {
		min.x = min.x.min(v.position.x);
		min.y = min.y.min(v.position.y);
		max.x = max.x.max(v.position.x);
		max.y = max.y.max(v.position.y);
	}

	let x0 = min.x.floor().max(0.0) as u32;
	let y0 = min.y.floor().max(0.0) as u32;
	let x1 = (max.x.ceil().max(0.0) as u32).min(width);
	let y1 = (max.y.ceil().max(0.0) as u32).min(height);

	for y in y0..y1 {
		for x in x0..x1 {
			let p = Vector2f::new(x as f32 + 0.5, y as f32 + 0.5);
			let Some(color) = triangles.iter().find_map(|tri| shade(tri, p, texture)) else {
				continue;
			};
			let dst = Color::from(canvas.get_pixel(x, y).0);
			canvas.put_pixel(x, y, Rgba(color.blend_over(dst).to_array()));
		}
	}
}

/// Color of `p` inside the triangle, or `None` if `p` is outside.
fn shade(tri: &[Vertex; 3], p: Vector2f, texture: Option<&Texture>) -> Option<Color> {
	let [a, b, c] = tri;
	let area = edge(a.position, b.position, c.position);
	if area == 0.0 {
		return None;
	}

	let wa = edge(b.position, c.position, p) / area;
	let wb = edge(c.position, a.position, p) / area;
	let wc = edge(a.position, b.position, p) / area;
	if wa < 0.0 || wb < 0.0 || wc < 0.0 {
		return None;
	}

	let color = a.color;
	let Some(texture) = texture else {
		return Some(color);
	};

	let u = wa * a.tex_coords.x + wb * b.tex_coords.x + wc * c.tex_coords.x;
	let v = wa * a.tex_coords.y + wb * b.tex_coords.y + wc * c.tex_coords.y;
	let size = texture.size();
	if size.x == 0 || size.y == 0 {
		return None;
	}
	let tx = (u.floor().max(0.0) as u32).min(size.x - 1);
	let ty = (v.floor().max(0.0) as u32).min(size.y - 1);
	texture.pixel(tx, ty).map(|texel| texel.modulate(color))
}
