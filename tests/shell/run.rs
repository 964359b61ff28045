//! Full runs with scripted input

use std::time::{Duration, Instant};

use chrono::{TimeZone, Utc};
use orion::prelude::*;

use crate::fixture::Resources;

fn window(frames: usize) -> HeadlessWindow {
	HeadlessWindow::new(800, 600, "Orion").unwrap().with_frame_budget(frames)
}

#[test_log::test]
fn test_typed_lines_end_up_in_history() {
	let resources = Resources::new("typed");
	let mut window = window(2);
	window.push_text("first\nsecond\nthird\nfourth\nfifth\npending");

	let mut orion = Orion::new(window, resources.settings());
	orion.run().unwrap();

	assert_eq!(orion.textfield().history(), vec![">> fifth\n", ">> fourth\n", ">> third\n", ">> second\n"]);
	assert_eq!(orion.textfield().buffer(), "pending");
	assert_eq!(orion.window().presented(), 2);
}

#[test]
fn test_snapshot_shows_wymon_frames() {
	let resources = Resources::new("snapshot");
	let mut orion = Orion::new(window(usize::MAX), resources.settings());
	orion.load_resources().unwrap();
	orion.layout();

	let time = Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 0).unwrap();
	let start = Instant::now();
	orion.update(start, &time);
	orion.update(start + Duration::from_millis(850), &time);
	orion.draw_all();

	let wymon = orion.wymon().position();
	let probe = (wymon.x as u32 + 50, wymon.y as u32 + 50);
	assert_eq!(orion.wymon().current_index(), Some(0));
	assert_eq!(orion.window().frame().get_pixel(probe.0, probe.1).0, [0, 255, 0, 255]);

	orion.update(start + Duration::from_millis(1700), &time);
	orion.draw_all();
	assert_eq!(orion.wymon().current_index(), Some(1));
	assert_eq!(orion.window().frame().get_pixel(probe.0, probe.1).0, [0, 0, 255, 255]);

	let path = resources.root().join("snapshot.png");
	orion.window().snapshot(&path).unwrap();
	let saved = image::open(&path).unwrap().to_rgba8();
	assert_eq!(saved.dimensions(), (800, 600));
	assert_eq!(saved.get_pixel(probe.0, probe.1).0, [0, 0, 255, 255]);
}

#[test]
fn test_clock_text_follows_time() {
	let resources = Resources::new("clock");
	let mut orion = Orion::new(window(1), resources.settings());
	orion.load_resources().unwrap();

	orion.update(Instant::now(), &Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 5).unwrap());
	assert_eq!(orion.time_text().string(), "08:30:05");

	orion.update(Instant::now(), &Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
	assert_eq!(orion.date_text().string(), "Friday, 01.03.2024");
}

#[test]
fn test_missing_icon_is_not_fatal() {
	let resources = Resources::new("no_icon");
	resources.remove("wymonIcon.png");

	let mut orion = Orion::new(window(1), resources.settings());
	orion.run().unwrap();
	assert_eq!(orion.window().icon_size(), None);
	assert_eq!(orion.window().presented(), 1);
}

#[test]
fn test_missing_sprite_sheet_aborts() {
	let resources = Resources::new("no_sheet");
	resources.remove("wymon.png");

	let mut orion = Orion::new(window(1), resources.settings());
	let err = orion.run().unwrap_err();
	assert!(matches!(err, ShellError::Resource(VfsError::NotFound(_))));
	assert_eq!(orion.window().presented(), 0);
}

#[test]
fn test_animation_clones_share_frames() {
	let resources = Resources::new("release");
	let mut orion = Orion::new(window(1), resources.settings());
	orion.run().unwrap();

	// The animation still holds its store.
	assert_eq!(orion.wymon().frame_count(), 2);
	let clone = orion.wymon().clone();
	assert!(clone.shares_frames_with(orion.wymon()));
}
