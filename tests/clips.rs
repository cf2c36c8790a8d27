//! Animation clip normalization

use rigprep::clips::{self, ClipDescriptor};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes logging in a "once per test run" manner. Call at the start of
/// each test that needs logging.
fn init_tests() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

fn clip_set() -> Vec<ClipDescriptor> {
    ["Run_Loop", "Idle", "Jump", "idle_breathing_LOOP"]
        .iter()
        .map(|n| ClipDescriptor::new(n))
        .collect()
}

#[test]
fn idempotent() {
    init_tests();
    let mut clips = clip_set();
    assert!(clips::normalize(&mut clips));
    let once = clips.clone();
    assert!(!clips::normalize(&mut clips));
    assert_eq!(clips, once);
}

#[test]
fn loop_clip() {
    init_tests();
    let clip = ClipDescriptor::new("Run_Loop");
    assert!(!clip.loop_time);
    let (clip, changed) = clip.normalized();
    assert!(changed);
    assert!(clip.loop_time);
    assert!(!clip.lock_root_position_xz);
}

#[test]
fn idle_clip() {
    init_tests();
    let (clip, changed) = ClipDescriptor::new("Idle").normalized();
    assert!(changed);
    assert!(clip.lock_root_position_xz);
    assert!(!clip.loop_time);
}

#[test]
fn root_motion_locked() {
    init_tests();
    let mut clips = clip_set();
    clips::normalize(&mut clips);
    for clip in &clips {
        assert!(clip.keep_original_orientation);
        assert!(clip.keep_original_position_y);
        assert!(clip.keep_original_position_xz);
        assert!(clip.lock_root_rotation);
        assert!(clip.lock_root_height_y);
    }
    assert!(clips[3].loop_time && clips[3].lock_root_position_xz);
    assert!(!clips[2].loop_time && !clips[2].lock_root_position_xz);
}

#[test]
fn flags_are_never_cleared() {
    init_tests();
    let mut clip = ClipDescriptor::new("Jump");
    clip.loop_time = true;
    clip.lock_root_position_xz = true;
    let (clip, _) = clip.normalized();
    assert!(clip.loop_time);
    assert!(clip.lock_root_position_xz);
}

#[test]
fn original_untouched() {
    init_tests();
    let clip = ClipDescriptor::new("Idle");
    let (_, changed) = clip.normalized();
    assert!(changed);
    assert_eq!(clip, ClipDescriptor::new("Idle"));
}
