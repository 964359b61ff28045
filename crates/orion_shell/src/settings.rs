//! Effective settings of the shell.
//!
//! There is no configuration file. Every value has a built-in default, can be
//! overridden by an environment variable and, in the binary, by a flag.

use std::{path::PathBuf, time::Duration};

use clap::Args;
use serde::{Deserialize, Serialize};

/// Shell settings.
#[derive(Debug, Clone, PartialEq, Eq, Args, Serialize, Deserialize)]
pub struct Settings {
	/// Directory holding the bundled resources
	#[arg(long = "resources", env = "ORION_RESOURCES", value_name = "DIR", default_value = "Resources")]
	pub resources: PathBuf,

	/// Window width in pixels
	#[arg(long, env = "ORION_WIDTH", default_value_t = 800)]
	pub width: u32,

	/// Window height in pixels
	#[arg(long, env = "ORION_HEIGHT", default_value_t = 600)]
	pub height: u32,

	/// Window title
	#[arg(long, env = "ORION_TITLE", default_value = "Orion")]
	pub title: String,

	/// Milliseconds between two animation frames
	#[arg(long = "interval", env = "ORION_INTERVAL_MS", value_name = "MS", default_value_t = 850)]
	pub interval_ms: u64,

	/// Number of submitted lines kept by the text field
	#[arg(long, env = "ORION_HISTORY", default_value_t = 4)]
	pub history: usize,

	/// Character size of the text field
	#[arg(long, env = "ORION_CHAR_SIZE", default_value_t = 15)]
	pub char_size: u32,

	/// Character size of the clock
	#[arg(long, env = "ORION_TIME_SIZE", default_value_t = 46)]
	pub time_size: u32,

	/// Character size of the date
	#[arg(long, env = "ORION_DATE_SIZE", default_value_t = 11)]
	pub date_size: u32,
}

impl Settings {
	/// Returns the animation interval.
	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			resources: PathBuf::from("Resources"),
			width: 800,
			height: 600,
			title: "Orion".to_string(),
			interval_ms: 850,
			history: 4,
			char_size: 15,
			time_size: 46,
			date_size: 11,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	#[derive(Parser)]
	struct Cli {
		#[command(flatten)]
		settings: Settings,
	}

	#[test]
	fn test_defaults_match_flags() {
		let cli = Cli::parse_from(["orion"]);
		assert_eq!(cli.settings, Settings::default());
		assert_eq!(cli.settings.interval(), Duration::from_millis(850));
	}

	#[test]
	fn test_flags_override() {
		let cli = Cli::parse_from(["orion", "--width", "1024", "--title", "Test", "--history", "6"]);
		assert_eq!(cli.settings.width, 1024);
		assert_eq!(cli.settings.title, "Test");
		assert_eq!(cli.settings.history, 6);
		assert_eq!(cli.settings.height, 600);
	}

	#[test]
	fn test_json_round_trip() {
		let json = serde_json::to_string(&Settings::default()).unwrap();
		assert!(json.contains("\"interval_ms\":850"));
		let back: Settings = serde_json::from_str(&json).unwrap();
		assert_eq!(back, Settings::default());
	}
}
