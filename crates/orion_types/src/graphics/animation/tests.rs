use super::*;
use crate::graphics::{Color, RecordingTarget, Texture};

fn sheet() -> TextureHandle {
	Texture::solid(256, 128, Color::WHITE).into_handle()
}

fn animation(registry: &mut FrameRegistry) -> Animation {
	Animation::with_texture(registry, sheet())
}

#[test]
fn test_insert_keeps_sequences_parallel() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::new(&mut registry);

	for (i, frame) in [Frame::new(0, 0, 10, 10), Frame::new(10, 0, 5, 5), Frame::new(20, 0, 7, 3)].into_iter().enumerate() {
		assert_eq!(anim.insert(frame, None), i);
		let store = anim.storage().borrow();
		assert_eq!(store.originals().len(), store.displays().len());
	}

	anim.insert_at(Frame::new(30, 0, 1, 1), 1, None).unwrap();
	anim.insert_group(&FrameGroup::new(0, 0, 20, 20, 10, 10), None);
	let store = anim.storage().borrow();
	assert_eq!(store.originals().len(), 8);
	assert_eq!(store.displays().len(), 8);
}

#[test]
fn test_insert_group_row_major() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(200, 0, 8, 8), None);

	let first = anim.insert_group(&FrameGroup::new(0, 0, 64, 32, 32, 16), None);
	assert_eq!(first, 1);
	assert_eq!(anim.frame_count(), 5);
	let positions: Vec<_> = (1..5).map(|i| anim.frame(i).unwrap()).collect();
	assert_eq!(
		positions,
		vec![
			Frame::new(0, 0, 32, 16),
			Frame::new(32, 0, 32, 16),
			Frame::new(0, 16, 32, 16),
			Frame::new(32, 16, 32, 16),
		]
	);
}

#[test]
fn test_insert_group_at() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::new(&mut registry);
	anim.insert(Frame::new(0, 0, 1, 1), None);
	anim.insert(Frame::new(1, 0, 1, 1), None);

	assert_eq!(anim.insert_group_at(&FrameGroup::new(0, 10, 4, 2, 2, 2), 1, None).unwrap(), 1);
	assert_eq!(anim.frame(1), Some(Frame::new(0, 10, 2, 2)));
	assert_eq!(anim.frame(2), Some(Frame::new(2, 10, 2, 2)));
	assert_eq!(anim.frame(3), Some(Frame::new(1, 0, 1, 1)));

	assert!(anim.insert_group_at(&FrameGroup::new(0, 0, 4, 4, 2, 2), 9, None).is_err());
	assert_eq!(anim.frame_count(), 4);
}

#[test]
fn test_advance_wraps_around() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert_group(&FrameGroup::new(0, 0, 96, 32, 32, 32), None);

	assert_eq!(anim.current_index(), None);
	let indices: Vec<_> = (0..4).map(|_| anim.advance()).collect();
	assert_eq!(indices, vec![0, 1, 2, 0]);
	assert_eq!(anim.current_index(), Some(0));
}

#[test]
fn test_advance_without_frames() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::with_texture_rect(&mut registry, sheet(), IntRect::new(0, 0, 20, 10));
	assert_eq!(anim.advance(), 0);
	assert_eq!(anim.advance(), 0);
	assert_eq!(anim.local_bounds(), FloatRect::new(0.0, 0.0, 20.0, 10.0));
}

#[test]
fn test_advance_to_is_checked() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 10, 10), None);
	anim.insert(Frame::new(10, 0, 20, 30), None);

	assert_eq!(anim.advance_to(1).unwrap(), 1);
	assert_eq!(anim.object_size(), Vector2f::new(20.0, 30.0));
	assert_eq!(anim.quad().vertices()[2].tex_coords, Vector2f::new(30.0, 30.0));

	let err = anim.advance_to(2).unwrap_err();
	assert!(matches!(
		err,
		OrionError::FrameIndexOutOfRange {
			index: 2,
			len: 2
		}
	));
	assert_eq!(anim.current_index(), Some(1));
}

#[test]
fn test_maximum_frame_size_is_per_axis() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::new(&mut registry);
	anim.insert(Frame::new(0, 0, 10, 20), None);
	anim.insert(Frame::new(0, 0, 30, 5), None);
	assert_eq!(anim.maximum_frame_size(), Vector2f::new(30.0, 20.0));
}

#[test]
fn test_maximum_transformed_size() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 10, 20), None);
	anim.insert(Frame::new(0, 0, 30, 5), None);
	anim.set_scale(Vector2f::new(2.0, 0.5));
	assert_eq!(anim.maximum_transformed_size(), Vector2f::new(60.0, 10.0));
}

#[test]
fn test_set_display_rect_is_idempotent() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 50, 50), None);
	anim.advance();

	let rect = IntRect::new(0, 0, 20, 30);
	anim.set_display_rect(rect);
	let displays = anim.storage().borrow().displays().to_vec();
	let vertices = *anim.quad().vertices();

	anim.set_display_rect(rect);
	assert_eq!(anim.storage().borrow().displays(), displays.as_slice());
	assert_eq!(*anim.quad().vertices(), vertices);
	assert_eq!(displays, vec![Frame::new(0, 0, 20, 30)]);
}

#[test]
fn test_local_bounds_before_insert() {
	let mut registry = FrameRegistry::new();
	let anim = Animation::new(&mut registry);
	assert_eq!(anim.local_bounds(), FloatRect::default());

	let anim = Animation::with_texture_rect(&mut registry, sheet(), IntRect::new(0, 0, 106, 96));
	assert_eq!(anim.local_bounds(), FloatRect::new(0.0, 0.0, 106.0, 96.0));
}

#[test]
fn test_local_bounds_clamps_unstarted_index() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 12, 8), None);
	anim.insert(Frame::new(12, 0, 40, 40), None);
	assert_eq!(anim.local_bounds(), FloatRect::new(0.0, 0.0, 12.0, 8.0));
}

#[test]
fn test_insert_clips_with_explicit_rect() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::with_texture_rect(&mut registry, sheet(), IntRect::new(0, 0, 106, 96));
	anim.insert(Frame::new(107, 0, 108, 96), None);
	anim.insert(Frame::new(0, 0, 64, 64), Some(IntRect::new(0, 0, 32, 16)));
	anim.insert(Frame::new(0, 0, 64, 64), Some(IntRect::default()));

	assert_eq!(anim.display_frame(0), Some(Frame::new(107, 0, 106, 96)));
	assert_eq!(anim.display_frame(1), Some(Frame::new(0, 0, 32, 16)));
	assert_eq!(anim.display_frame(2), Some(Frame::new(0, 0, 64, 64)));
}

#[test]
fn test_replace_resize_reposition() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::with_texture_rect(&mut registry, sheet(), IntRect::new(0, 0, 50, 50));
	anim.insert(Frame::new(0, 0, 10, 10), None);
	anim.advance();

	anim.replace(0, Frame::new(5, 5, 40, 80)).unwrap();
	assert_eq!(anim.display_frame(0), Some(Frame::new(5, 5, 40, 50)));
	assert_eq!(anim.object_size(), Vector2f::new(40.0, 50.0));

	anim.resize_frame(0, Vector2i::new(60, 20)).unwrap();
	assert_eq!(anim.frame(0), Some(Frame::new(5, 5, 60, 20)));
	assert_eq!(anim.display_frame(0), Some(Frame::new(5, 5, 50, 20)));
	assert_eq!(anim.maximum_frame_size(), Vector2f::new(50.0, 50.0));

	anim.reposition_frame(0, Vector2i::new(100, 10)).unwrap();
	assert_eq!(anim.display_frame(0), Some(Frame::new(100, 10, 50, 20)));
	assert_eq!(anim.quad().vertices()[0].tex_coords, Vector2f::new(100.0, 10.0));

	assert!(anim.replace(1, Frame::default()).is_err());
	assert!(anim.resize_frame(1, Vector2i::new(1, 1)).is_err());
	assert!(anim.reposition_frame(1, Vector2i::new(1, 1)).is_err());
}

#[test]
fn test_edits_refresh_shown_frame_before_advance() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 10, 10), None);
	anim.insert(Frame::new(0, 0, 20, 20), None);
	assert_eq!(anim.current_index(), None);

	anim.replace(0, Frame::new(20, 30, 40, 50)).unwrap();
	assert_eq!(anim.quad().vertices()[0].tex_coords, Vector2f::new(20.0, 30.0));
	assert_eq!(anim.quad().vertices()[2].position, Vector2f::new(40.0, 50.0));

	anim.resize_frame(0, Vector2i::new(16, 8)).unwrap();
	assert_eq!(anim.quad().vertices()[2].position, Vector2f::new(16.0, 8.0));

	anim.reposition_frame(0, Vector2i::new(1, 2)).unwrap();
	assert_eq!(anim.quad().vertices()[0].tex_coords, Vector2f::new(1.0, 2.0));

	// Frame 1 is not shown, the geometry stays on frame 0.
	anim.replace(1, Frame::new(0, 0, 99, 99)).unwrap();
	assert_eq!(anim.quad().vertices()[2].position, Vector2f::new(16.0, 8.0));
	assert_eq!(anim.current_index(), None);
}

#[test]
fn test_clone_aliases_frames() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	let mut alias = anim.clone();
	assert!(anim.shares_frames_with(&alias));
	assert_eq!(registry.holders(0), Some(2));

	alias.insert(Frame::new(0, 0, 8, 8), None);
	assert_eq!(anim.frame_count(), 1);

	anim.advance();
	assert_eq!(alias.current_index(), None);

	drop(anim);
	assert_eq!(registry.live_count(), 1);
	drop(alias);
	assert_eq!(registry.live_count(), 0);
	assert_eq!(registry.compact(), 1);
}

#[test]
fn test_from_storage_picks_up_maxima() {
	let mut registry = FrameRegistry::new();
	let mut anim = Animation::new(&mut registry);
	anim.insert(Frame::new(0, 0, 10, 40), None);
	anim.insert(Frame::new(0, 0, 25, 4), None);

	let player = Animation::from_storage(Rc::clone(anim.storage()));
	assert!(player.shares_frames_with(&anim));
	assert_eq!(player.maximum_frame_size(), Vector2f::new(25.0, 40.0));
}

#[test]
fn test_draw_binds_texture_and_transform() {
	let mut registry = FrameRegistry::new();
	let mut anim = animation(&mut registry);
	anim.insert(Frame::new(0, 0, 16, 16), None);
	anim.advance();
	anim.set_position(Vector2f::new(3.0, 4.0));

	let mut target = RecordingTarget::default();
	anim.draw(&mut target, &RenderStates::default());
	assert_eq!(target.calls.len(), 1);
	let (vertices, _, transform, textured) = &target.calls[0];
	assert!(textured);
	assert_eq!(vertices[2].position, Vector2f::new(16.0, 16.0));
	assert_eq!(transform.transform_point(Vector2f::default()), Vector2f::new(3.0, 4.0));
}
