// Host-side tests for the falling-heart field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod rng {
        include!("../src/core/rng.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
    pub mod hearts {
        include!("../src/core/hearts.rs");
    }
}

use card::constants::*;
use card::hearts::*;
use card::rng::RandomSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::time::Duration;

struct Scripted {
    values: Vec<f32>,
    pos: usize,
}

impl Scripted {
    fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

fn assert_in_range(h: &HeartDescriptor) {
    assert!((HEART_LEFT_PCT_MIN..=HEART_LEFT_PCT_MAX).contains(&h.left_pct), "left {}", h.left_pct);
    assert!((HEART_DELAY_SEC_MIN..=HEART_DELAY_SEC_MAX).contains(&h.delay_sec), "delay {}", h.delay_sec);
    assert!(
        (HEART_DURATION_SEC_MIN..=HEART_DURATION_SEC_MAX).contains(&h.duration_sec),
        "duration {}",
        h.duration_sec
    );
    assert!((HEART_SIZE_PX_MIN..=HEART_SIZE_PX_MAX).contains(&h.size_px), "size {}", h.size_px);
    assert!((HEART_OPACITY_MIN..=HEART_OPACITY_MAX).contains(&h.opacity), "opacity {}", h.opacity);
    assert!(HEART_PALETTE.contains(&h.color), "color {}", h.color);
}

const FRAME: Duration = Duration::from_micros(16_667);

#[test]
fn mount_fills_window_with_in_range_hearts() {
    let mut rng = StdRng::seed_from_u64(7);
    let field = HeartField::mount(800.0, 0.0, 0, &mut rng);
    assert_eq!(field.len(), HEART_WINDOW_SIZE);
    for h in field.hearts() {
        assert_in_range(h);
        assert_eq!(h.spawned_at_ms, 0.0);
    }
    assert_eq!(field.fall_to_px(), 800.0 + HEART_EXIT_MARGIN_PX);
}

#[test]
fn extreme_samples_stay_in_range() {
    let mut low = Scripted::new(&[0.0]);
    let h = HeartDescriptor::random(1, 0.0, &mut low);
    assert_in_range(&h);
    assert_eq!(h.left_pct, HEART_LEFT_PCT_MIN);
    assert_eq!(h.duration_sec, HEART_DURATION_SEC_MIN);
    assert_eq!(h.color, HEART_PALETTE[0]);

    let mut high = Scripted::new(&[0.999_999]);
    let h = HeartDescriptor::random(2, 0.0, &mut high);
    assert_in_range(&h);
    assert_eq!(h.color, HEART_PALETTE[HEART_PALETTE.len() - 1]);

    // out-of-contract sources are clamped rather than trusted
    let mut broken = Scripted::new(&[1.5]);
    assert_in_range(&HeartDescriptor::random(3, 0.0, &mut broken));
}

#[test]
fn window_size_is_constant_over_many_ticks() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = HeartField::mount(700.0, 0.0, 0, &mut rng);
    let mut now_ms = 0.0;
    let mut replaced = 0;
    // five minutes of frames
    for _ in 0..(60 * 60 * 5) {
        now_ms += FRAME.as_secs_f64() * 1000.0;
        replaced += field.tick(FRAME, now_ms, &mut rng);
        assert_eq!(field.len(), HEART_WINDOW_SIZE);
    }
    assert!(replaced > 350, "expected ~375 replacements, got {replaced}");
    for h in field.hearts() {
        assert_in_range(h);
    }
}

#[test]
fn slide_evicts_oldest_and_appends_newest() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = HeartField::mount(600.0, 0.0, 100, &mut rng);
    let first_before = field.hearts().next().map(|h| h.id);
    assert_eq!(first_before, Some(100));

    field.slide(800.0, &mut rng);
    let ids: Vec<u64> = field.hearts().map(|h| h.id).collect();
    assert_eq!(ids.first(), Some(&101));
    assert_eq!(ids.last(), Some(&115));
    assert_eq!(field.hearts().last().map(|h| h.spawned_at_ms), Some(800.0));
    assert_eq!(field.next_id(), 116);
}

#[test]
fn spawns_once_per_interval() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = HeartField::mount(600.0, 0.0, 0, &mut rng);
    assert_eq!(field.tick(Duration::from_millis(799), 799.0, &mut rng), 0);
    assert_eq!(field.tick(Duration::from_millis(1), 800.0, &mut rng), 1);
    // a stalled tab catches up in one go
    assert_eq!(field.tick(Duration::from_millis(2400), 3200.0, &mut rng), 3);
    assert_eq!(field.len(), HEART_WINDOW_SIZE);
}

#[test]
fn long_stall_replaces_at_most_one_window_with_staggered_hearts() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut field = HeartField::mount(600.0, 0.0, 0, &mut rng);
    let now_ms = 3_600_000.0;
    let replaced = field.tick(Duration::from_secs(3600), now_ms, &mut rng);
    assert_eq!(replaced, HEART_WINDOW_SIZE as u32);
    assert_eq!(field.len(), HEART_WINDOW_SIZE);
    assert_eq!(field.next_id(), 2 * HEART_WINDOW_SIZE as u64);

    let spawned: Vec<f64> = field.hearts().map(|h| h.spawned_at_ms).collect();
    assert_eq!(spawned.last(), Some(&now_ms));
    for pair in spawned.windows(2) {
        assert_eq!(pair[1] - pair[0], HEART_SPAWN_INTERVAL_MS as f64);
    }

    // the next regular interval slides exactly once
    assert_eq!(field.tick(Duration::from_millis(800), now_ms + 800.0, &mut rng), 1);
}

#[test]
fn one_second_after_mount_has_fifteen_distinct_ids() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = HeartField::mount(900.0, 0.0, 0, &mut rng);
    let mut now_ms = 0.0;
    for _ in 0..60 {
        now_ms += FRAME.as_secs_f64() * 1000.0;
        field.tick(FRAME, now_ms, &mut rng);
    }
    assert_eq!(field.len(), 15);
    let ids: HashSet<u64> = field.hearts().map(|h| h.id).collect();
    assert_eq!(ids.len(), 15);
}

#[test]
fn unmount_cancels_spawning() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = HeartField::mount(600.0, 0.0, 0, &mut rng);
    assert!(field.is_mounted());
    field.unmount();
    assert!(!field.is_mounted());
    let before: Vec<u64> = field.hearts().map(|h| h.id).collect();
    assert_eq!(field.tick(Duration::from_secs(10), 10_000.0, &mut rng), 0);
    let after: Vec<u64> = field.hearts().map(|h| h.id).collect();
    assert_eq!(before, after);
}

#[test]
fn pose_is_linear_between_delay_and_end() {
    let heart = HeartDescriptor {
        id: 0,
        left_pct: 50.0,
        delay_sec: 1.0,
        duration_sec: 4.0,
        size_px: 30.0,
        opacity: 0.8,
        color: HEART_PALETTE[0],
        spawned_at_ms: 0.0,
    };

    let waiting = heart.pose(500.0, 900.0);
    assert_eq!(waiting.y_px, HEART_START_Y_PX);
    assert!((waiting.opacity - 0.8).abs() < 1e-6);
    assert_eq!(waiting.rotation_deg, 0.0);

    let midway = heart.pose(3000.0, 900.0);
    assert!((midway.y_px - 425.0).abs() < 1e-3, "y {}", midway.y_px);
    assert!((midway.opacity - 0.4).abs() < 1e-5);
    assert!((midway.rotation_deg - 180.0).abs() < 1e-3);

    let done = heart.pose(60_000.0, 900.0);
    assert_eq!(done.y_px, 900.0);
    assert_eq!(done.opacity, 0.0);
    assert_eq!(done.rotation_deg, HEART_ROTATION_DEG);
}
