//! Orion on the headless backend.
//!
//! Runs the shell for a number of frames, optionally typing text into the
//! text field, and writes the last frame to an image:
//!
//! ```text
//! orion --resources Resources --frames 120 --type 'hello\n' --snapshot orion.png
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use orion::prelude::*;

#[derive(Parser)]
#[command(name = "orion")]
#[command(author = "orion project")]
#[command(version)]
#[command(about = "Wymon, a clock and a text field", long_about = None)]
struct Cli {
	#[command(flatten)]
	settings: Settings,

	/// Number of frames to present before closing
	#[arg(long, value_name = "N", default_value_t = 1)]
	frames: usize,

	/// Text typed into the text field, `\n` submits a line
	#[arg(long = "type", value_name = "TEXT")]
	text: Option<String>,

	/// Write the last frame to this image file
	#[arg(long, value_name = "FILE")]
	snapshot: Option<PathBuf>,

	/// Print the effective settings as JSON and exit
	#[arg(long, default_value_t = false)]
	dump_settings: bool,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	if cli.dump_settings {
		println!("{}", serde_json::to_string_pretty(&cli.settings)?);
		return Ok(());
	}

	let settings = cli.settings;
	let mut window = HeadlessWindow::new(settings.width, settings.height, &settings.title)?.with_frame_budget(cli.frames);
	if let Some(text) = &cli.text {
		window.push_text(&text.replace("\\n", "\n"));
	}

	let mut orion = Orion::new(window, settings);
	orion.run().with_context(|| format!("Orion failed with resources from {}", orion.settings().resources.display()))?;

	for line in orion.textfield().history().iter().rev() {
		info!("{}", line.trim_end());
	}

	if let Some(path) = &cli.snapshot {
		orion.window().snapshot(path).with_context(|| format!("Failed to write snapshot {}", path.display()))?;
	}

	Ok(())
}
