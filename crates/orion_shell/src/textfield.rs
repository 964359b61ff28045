//! Text input field with a short history.
//!
//! ```text
//! ┌ outer box ───────────────────────────────┐
//! │ >> oldest submitted line                 │  history row limit - 1
//! │ ...                                      │
//! │ >> newest submitted line                 │  history row 0
//! │ ┌ text box ────────────────────────────┐ │
//! │ │ unsubmitted text                     │ │
//! │ └──────────────────────────────────────┘ │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Call [`Textfield::draw_box`] with the render size before typing: the text
//! box width bounds how long a line may grow.

use std::collections::VecDeque;

use log::debug;
use orion_types::{
	geometry::{Vector2f, Vector2u},
	graphics::{Color, Drawable, FontHandle, RectangleShape, RenderStates, RenderTarget, Text},
	system::{Key, unicode},
};

/// Default number of submitted lines kept.
pub const DEFAULT_LIMIT: usize = 4;

/// Prepended to every submitted line.
pub const PROMPT: &str = ">> ";

/// Width reserved for the prompt when checking the line width.
pub const PROMPT_WIDTH: f32 = 24.0;

/// Space between the outer box and its content.
pub const PADDING: f32 = 10.0;

/// Outline thickness of the outer box.
pub const BORDER: f32 = 2.0;

/// Space between the window edge and the outer box.
pub const MARGIN: f32 = 20.0;

const LINE_SPACING: f32 = 2.0;
const COLUMN_SPACING: f32 = 2.0;
const TEXT_BOX_OUTLINE: f32 = 1.0;

const BOX_BORDER_COLOR: Color = Color::rgb(224, 224, 224);
const OUTER_BOX_COLOR: Color = Color::rgba(255, 255, 255, 85);
const TEXT_BOX_COLOR: Color = Color::WHITE;

/// Text input field.
#[derive(Debug, Clone)]
pub struct Textfield {
	limit: usize,
	character_size: u32,
	buffer: String,
	current: Text,
	history: VecDeque<Text>,
	outer_box: RectangleShape,
	text_box: RectangleShape,
	text_height: f32,
}

impl Textfield {
	/// Creates an empty text field keeping `limit` submitted lines.
	pub fn new(limit: usize, character_size: u32) -> Self {
		let blank = blank_text(character_size);
		Self {
			limit,
			character_size,
			buffer: String::new(),
			current: blank.clone(),
			history: std::iter::repeat_n(blank, limit).collect(),
			outer_box: RectangleShape::default(),
			text_box: RectangleShape::default(),
			text_height: 2.0 * LINE_SPACING + character_size as f32,
		}
	}

	/// Sets the font of every line.
	pub fn set_font(&mut self, font: &FontHandle) {
		self.current.set_font(FontHandle::clone(font));
		for text in &mut self.history {
			text.set_font(FontHandle::clone(font));
		}
	}

	/// Handles one typed character.
	///
	/// Printable characters are appended unless the line would no longer fit
	/// into the text box. A newline submits the line, backspace removes the
	/// last character, everything else is ignored.
	pub fn put_char(&mut self, key: Key) {
		if unicode::is_printable(key) {
			let Some(c) = char::from_u32(key) else {
				return;
			};
			self.buffer.push(c);
			self.current.set_string(&self.buffer);
			if self.is_too_wide() {
				self.buffer.pop();
				self.current.set_string(&self.buffer);
			}
		} else if unicode::is_newline(key) {
			self.buffer.push('\n');
			self.submit();
		} else if key == unicode::BACKSPACE && self.buffer.pop().is_some() {
			self.current.set_string(&self.buffer);
		}
	}

	/// Sizes the boxes for a render area.
	pub fn draw_box(&mut self, render_size: Vector2u) {
		let outer = Vector2f::new(
			(render_size.x as f32 - 2.0 * BORDER - 2.0 * MARGIN).max(0.0),
			(self.limit + 1) as f32 * self.text_height + 3.0 * PADDING,
		);
		self.outer_box.set_size(outer);
		self.outer_box.set_outline_thickness(BORDER);
		self.outer_box.set_outline_color(BOX_BORDER_COLOR);
		self.outer_box.set_fill_color(OUTER_BOX_COLOR);

		self.text_box.set_size(Vector2f::new((outer.x - 2.0 * PADDING).max(0.0), self.text_height));
		self.text_box.set_outline_thickness(TEXT_BOX_OUTLINE);
		self.text_box.set_outline_color(BOX_BORDER_COLOR);
		self.text_box.set_fill_color(TEXT_BOX_COLOR);
	}

	/// Places the field with its outer box at `position`.
	///
	/// The text box sits at the bottom, the history rows are stacked upwards
	/// from it, newest first.
	pub fn set_position(&mut self, position: Vector2f) {
		self.outer_box.set_position(position);

		let text_box = Vector2f::new(
			position.x + PADDING,
			position.y + 2.0 * PADDING + self.limit as f32 * self.text_height,
		);
		let text = text_box + Vector2f::new(COLUMN_SPACING, LINE_SPACING);
		self.text_box.set_position(text_box);
		self.current.set_position(text);

		let mut row = Vector2f::new(text.x, text.y - self.text_height - self.text_box.outline_thickness() - PADDING);
		for line in &mut self.history {
			line.set_position(row);
			row.y -= self.text_height;
		}
	}

	/// Returns the position of the outer box.
	pub fn position(&self) -> Vector2f {
		self.outer_box.position()
	}

	/// Returns the size of the outer box, without its outline.
	pub fn size(&self) -> Vector2f {
		self.outer_box.size()
	}

	/// Returns the unsubmitted text.
	pub fn buffer(&self) -> &str {
		&self.buffer
	}

	/// Returns the submitted lines, newest first.
	pub fn history(&self) -> Vec<String> {
		self.history.iter().map(Text::string).filter(|s| !s.is_empty()).collect()
	}

	/// Returns the history line texts, newest first, including empty rows.
	pub fn history_texts(&self) -> impl Iterator<Item = &Text> {
		self.history.iter()
	}

	/// Returns the unsubmitted line's text.
	pub fn current_text(&self) -> &Text {
		&self.current
	}

	/// Returns the number of kept lines.
	pub fn limit(&self) -> usize {
		self.limit
	}

	fn is_too_wide(&self) -> bool {
		self.current.object_size().x + PROMPT_WIDTH + COLUMN_SPACING > self.text_box.size().x
	}

	fn submit(&mut self) {
		let mut line = blank_text(self.character_size);
		if let Some(font) = self.current.font() {
			line.set_font(FontHandle::clone(font));
		}
		line.set_string(&format!("{}{}", PROMPT, self.buffer));
		debug!("Submitted {:?}", self.buffer.trim_end());

		if self.limit > 0 {
			self.history.push_front(line);
			self.history.truncate(self.limit);
		}
		self.buffer.clear();
		self.current.set_string(&self.buffer);

		let position = self.outer_box.position();
		self.set_position(position);
	}
}

impl Default for Textfield {
	fn default() -> Self {
		Self::new(DEFAULT_LIMIT, 15)
	}
}

impl Drawable for Textfield {
	fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates<'_>) {
		self.outer_box.draw(target, states);
		self.text_box.draw(target, states);
		self.current.draw(target, states);
		for line in &self.history {
			line.draw(target, states);
		}
	}
}

fn blank_text(character_size: u32) -> Text {
	let mut text = Text::default();
	text.set_character_size(character_size);
	text.set_color(Color::BLACK);
	text
}
