//! End-to-end playback scenarios through the player.
//!
//! Each scenario builds a player with solid-color clips and checks the
//! rendered frames against reference frames by content hash, so any
//! pixel-level regression in the tick/draw pipeline is caught.

use showreel_core::hash::hash_frame;
use showreel_core::{Color, FrameBuffer};
use showreel_render::{CompositionMode, FrameSequenceSource, Player, VideoSource};

const W: u32 = 16;
const H: u32 = 16;

fn solid_clip(color: Color, frames: usize) -> Box<dyn VideoSource> {
    Box::new(FrameSequenceSource::new(
        (0..frames)
            .map(|_| FrameBuffer::solid(W, H, &color))
            .collect(),
    ))
}

fn reference(color: Color) -> FrameBuffer {
    FrameBuffer::solid(W, H, &color)
}

#[test]
fn test_passthrough_cycles_clip_colors() {
    let mut player = Player::new(W, H);
    player.start(
        CompositionMode::Passthrough,
        vec![
            solid_clip(Color::RED, 2),
            solid_clip(Color::GREEN, 2),
            solid_clip(Color::BLUE, 2),
        ],
    );

    // Each 2-frame clip occupies two steps; after the last clip ends
    // the sequence wraps back to the first.
    let expected = [
        Color::RED,
        Color::GREEN,
        Color::GREEN,
        Color::BLUE,
        Color::BLUE,
        Color::RED,
        Color::RED,
    ];
    for (step, color) in expected.iter().enumerate() {
        let frame = player.step();
        assert_eq!(
            hash_frame(frame),
            hash_frame(&reference(*color)),
            "unexpected canvas color at step {step}"
        );
    }
}

#[test]
fn test_empty_source_list_renders_black() {
    let mut player = Player::new(W, H);
    player.start(CompositionMode::Passthrough, Vec::new());
    for _ in 0..3 {
        let frame = player.step();
        assert_eq!(hash_frame(frame), hash_frame(&reference(Color::BLACK)));
    }
}

#[test]
fn test_stop_mid_play_reverts_to_background() {
    let mut player = Player::new(W, H);
    player.start(CompositionMode::Passthrough, vec![solid_clip(Color::RED, 4)]);
    let frame = player.step();
    assert_eq!(hash_frame(frame), hash_frame(&reference(Color::RED)));

    player.stop();
    let frame = player.step();
    assert_eq!(hash_frame(frame), hash_frame(&reference(Color::BLACK)));
}

#[test]
fn test_crossfade_mode_renders_cleared_canvas() {
    let mut player = Player::new(W, H);
    player
        .start_mode("crossfade", vec![solid_clip(Color::RED, 2)])
        .unwrap();
    let frame = player.step();
    assert_eq!(hash_frame(frame), hash_frame(&reference(Color::BLACK)));
}

#[test]
fn test_unknown_mode_is_rejected() {
    let mut player = Player::new(W, H);
    let err = player.start_mode("additive", Vec::new()).unwrap_err();
    assert!(err.to_string().contains("unknown composition mode"));
    assert!(!player.has_composition());
}

#[test]
fn test_undersized_clip_is_scaled_to_fill() {
    // A 4x4 clip on a 16x16 canvas must cover the whole canvas after
    // aspect fill, leaving no black bands.
    let clip: Box<dyn VideoSource> = Box::new(FrameSequenceSource::new(vec![
        FrameBuffer::solid(4, 4, &Color::RED);
        2
    ]));
    let mut player = Player::new(W, H);
    player.start(CompositionMode::Passthrough, vec![clip]);
    let frame = player.step();
    assert_eq!(hash_frame(frame), hash_frame(&reference(Color::RED)));
}

#[test]
fn test_wide_clip_is_center_cropped() {
    // A 32x16 clip whose left half is red and right half is blue, on a
    // 16x16 canvas: the fill scale matches the height and crops both
    // sides, so the visible region straddles the color boundary.
    let mut clip_frame = FrameBuffer::solid(32, 16, &Color::RED);
    for y in 0..16 {
        for x in 16..32 {
            clip_frame.set_pixel(x, y, Color::BLUE.to_rgba8());
        }
    }
    let source: Box<dyn VideoSource> =
        Box::new(FrameSequenceSource::new(vec![clip_frame; 2]));

    let mut player = Player::new(W, H);
    player.start(CompositionMode::Passthrough, vec![source]);
    let frame = player.step();

    assert_eq!(frame.get_pixel(0, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.get_pixel(7, 8), Some([255, 0, 0, 255]));
    assert_eq!(frame.get_pixel(8, 8), Some([0, 0, 255, 255]));
    assert_eq!(frame.get_pixel(15, 8), Some([0, 0, 255, 255]));
}
