//! Benchmark suite for frame storage and playback
//!
//! Measures frame insertion with display rectangle clipping, playback
//! stepping, re-clipping after a display rectangle change and software
//! rasterization of an animation.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use orion_benches::{scattered_frames, sheet_group, sheet_texture, sheets};
use orion_shell::{HeadlessWindow, Window};
use orion_types::{
	geometry::IntRect,
	graphics::{Animation, Color, Drawable, FrameRegistry, RenderStates, Texturable},
};

/// Benchmark inserting whole sheets
fn bench_insert_group(c: &mut Criterion) {
	let mut group = c.benchmark_group("insert_group");

	for (name, (columns, rows, frame)) in [("wymon", sheets::WYMON), ("walk", sheets::WALK_CYCLE), ("atlas", sheets::ATLAS)] {
		let frames = sheet_group(columns, rows, frame);
		let texture = sheet_texture(columns, rows, frame);
		group.throughput(Throughput::Elements(frames.len() as u64));
		group.bench_with_input(BenchmarkId::new("append", name), &frames, |b, frames| {
			b.iter(|| {
				let mut registry = FrameRegistry::new();
				let mut animation = Animation::with_texture(&mut registry, texture.clone());
				black_box(animation.insert_group(black_box(frames), None))
			});
		});
	}

	group.finish();
}

/// Benchmark single inserts that need clipping
fn bench_insert_clipped(c: &mut Criterion) {
	let mut group = c.benchmark_group("insert_clipped");
	let bounds = IntRect::new(0, 0, 512, 512);
	let texture = sheet_texture(32, 32, (16, 16));

	for count in [16usize, 256, 4096] {
		let frames = scattered_frames(count, bounds);
		group.throughput(Throughput::Elements(count as u64));
		group.bench_with_input(BenchmarkId::from_parameter(count), &frames, |b, frames| {
			b.iter(|| {
				let mut registry = FrameRegistry::new();
				let mut animation = Animation::with_texture_rect(&mut registry, texture.clone(), IntRect::new(64, 64, 256, 256));
				for frame in frames {
					animation.insert(*frame, None);
				}
				black_box(animation.maximum_frame_size())
			});
		});
	}

	group.finish();
}

/// Benchmark re-clipping every stored frame
fn bench_apply_display_rect(c: &mut Criterion) {
	let mut group = c.benchmark_group("apply_display_rect");
	let (columns, rows, frame) = sheets::ATLAS;
	let mut registry = FrameRegistry::new();
	let mut animation = Animation::with_texture(&mut registry, sheet_texture(columns, rows, frame));
	animation.insert_group(&sheet_group(columns, rows, frame), None);

	let rects = [IntRect::new(0, 0, 256, 256), IntRect::new(128, 128, 384, 384)];
	group.throughput(Throughput::Elements(animation.frame_count() as u64));
	group.bench_function("atlas", |b| {
		let mut flip = false;
		b.iter(|| {
			flip = !flip;
			animation.set_display_rect(rects[usize::from(flip)]);
			black_box(animation.display_frame(0))
		});
	});

	group.finish();
}

/// Benchmark playback stepping
fn bench_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("advance");
	let (columns, rows, frame) = sheets::WALK_CYCLE;
	let mut registry = FrameRegistry::new();
	let mut animation = Animation::with_texture(&mut registry, sheet_texture(columns, rows, frame));
	animation.insert_group(&sheet_group(columns, rows, frame), None);

	group.bench_function("walk_cycle", |b| {
		b.iter(|| black_box(animation.advance()));
	});

	group.finish();
}

/// Benchmark drawing an animation into the software window
fn bench_headless_draw(c: &mut Criterion) {
	let mut group = c.benchmark_group("headless_draw");
	let (columns, rows, frame) = sheets::WYMON;
	let mut registry = FrameRegistry::new();
	let mut animation = Animation::with_texture(&mut registry, sheet_texture(columns, rows, frame));
	animation.insert_group(&sheet_group(columns, rows, frame), None);
	animation.set_scale(orion_types::geometry::Vector2f::new(2.0, 2.0));

	let Ok(mut window) = HeadlessWindow::new(800, 600, "bench") else {
		eprintln!("Warning: Could not create headless window");
		return;
	};

	group.sample_size(50);
	group.bench_function("wymon_frame", |b| {
		b.iter(|| {
			window.clear(Color::BLACK);
			animation.advance();
			animation.draw(&mut window, &RenderStates::default());
			window.display();
		});
	});

	group.finish();
}

criterion_group!(
	benches,
	bench_insert_group,
	bench_insert_clipped,
	bench_apply_display_rect,
	bench_advance,
	bench_headless_draw,
);

criterion_main!(benches);
