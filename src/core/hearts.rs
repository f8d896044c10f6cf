use super::constants::*;
use super::rng::RandomSource;
use super::schedule::Periodic;
use std::collections::VecDeque;
use std::time::Duration;

/// Rendering parameters for one falling heart.
///
/// Fields:
/// - `left_pct`: horizontal position as a percentage of viewport width
/// - `delay_sec`: wait before the fall starts
/// - `duration_sec`: length of the fall
/// - `size_px`: edge length of the square the heart is drawn in
/// - `opacity`: starting opacity; fades to zero over the fall
/// - `color`: CSS color from `HEART_PALETTE`
/// - `spawned_at_ms`: wall-clock time the descriptor was created
#[derive(Clone, Debug, PartialEq)]
pub struct HeartDescriptor {
    pub id: u64,
    pub left_pct: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub size_px: f32,
    pub opacity: f32,
    pub color: &'static str,
    pub spawned_at_ms: f64,
}

impl HeartDescriptor {
    /// Draw every attribute independently and uniformly from its range.
    pub fn random<R: RandomSource + ?Sized>(id: u64, now_ms: f64, rng: &mut R) -> Self {
        Self {
            id,
            left_pct: rng.range(HEART_LEFT_PCT_MIN, HEART_LEFT_PCT_MAX),
            delay_sec: rng.range(HEART_DELAY_SEC_MIN, HEART_DELAY_SEC_MAX),
            duration_sec: rng.range(HEART_DURATION_SEC_MIN, HEART_DURATION_SEC_MAX),
            size_px: rng.range(HEART_SIZE_PX_MIN, HEART_SIZE_PX_MAX),
            opacity: rng.range(HEART_OPACITY_MIN, HEART_OPACITY_MAX),
            color: HEART_PALETTE[rng.index(HEART_PALETTE.len())],
            spawned_at_ms: now_ms,
        }
    }

    /// Sample the linear fall animation at wall-clock `now_ms`.
    pub fn pose(&self, now_ms: f64, fall_to_px: f32) -> HeartPose {
        let elapsed_sec = ((now_ms - self.spawned_at_ms) / 1000.0) as f32 - self.delay_sec;
        let t = if self.duration_sec > 0.0 {
            (elapsed_sec / self.duration_sec).clamp(0.0, 1.0)
        } else {
            1.0
        };
        HeartPose {
            y_px: HEART_START_Y_PX + (fall_to_px - HEART_START_Y_PX) * t,
            opacity: self.opacity * (1.0 - t),
            rotation_deg: HEART_ROTATION_DEG * t,
        }
    }
}

/// Animated state of a heart at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPose {
    pub y_px: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
}

/// Sliding window of falling hearts.
///
/// Mounting fills the window; afterwards every `HEART_SPAWN_INTERVAL_MS` the
/// oldest heart is evicted and a fresh one appended, so the window never
/// grows. The fall target is sampled from the viewport height once, at mount.
pub struct HeartField {
    hearts: VecDeque<HeartDescriptor>,
    timer: Periodic,
    next_id: u64,
    fall_to_px: f32,
}

impl HeartField {
    pub fn mount<R: RandomSource + ?Sized>(
        viewport_height_px: f32,
        now_ms: f64,
        first_id: u64,
        rng: &mut R,
    ) -> Self {
        let mut field = Self {
            hearts: VecDeque::with_capacity(HEART_WINDOW_SIZE + 1),
            timer: Periodic::new(Duration::from_millis(HEART_SPAWN_INTERVAL_MS))
                .with_catch_up_limit(HEART_WINDOW_SIZE as u32),
            next_id: first_id,
            fall_to_px: viewport_height_px + HEART_EXIT_MARGIN_PX,
        };
        for _ in 0..HEART_WINDOW_SIZE {
            let heart = field.spawn(now_ms, rng);
            field.hearts.push_back(heart);
        }
        log::debug!(
            "[hearts] mounted {} hearts, ids {}..{}",
            field.hearts.len(),
            first_id,
            field.next_id
        );
        field
    }

    /// Advance the spawn timer; returns how many hearts were replaced.
    ///
    /// After a stall the missed spawns are anchored one interval apart,
    /// ending at `now_ms`, and never exceed one full window.
    pub fn tick<R: RandomSource + ?Sized>(&mut self, dt: Duration, now_ms: f64, rng: &mut R) -> u32 {
        let fired = self.timer.advance(dt);
        for behind in (0..fired).rev() {
            let spawned_at_ms = now_ms - f64::from(behind) * HEART_SPAWN_INTERVAL_MS as f64;
            self.slide(spawned_at_ms, rng);
        }
        fired
    }

    /// Evict the oldest heart and append a new one.
    pub fn slide<R: RandomSource + ?Sized>(&mut self, now_ms: f64, rng: &mut R) {
        let heart = self.spawn(now_ms, rng);
        self.hearts.pop_front();
        self.hearts.push_back(heart);
    }

    /// Cancel the spawn timer. The current hearts stay until dropped.
    pub fn unmount(&mut self) {
        self.timer.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.timer.is_cancelled()
    }

    pub fn hearts(&self) -> impl Iterator<Item = &HeartDescriptor> + '_ {
        self.hearts.iter()
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    /// First id not yet handed out; a remounted field continues from here.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn fall_to_px(&self) -> f32 {
        self.fall_to_px
    }

    fn spawn<R: RandomSource + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> HeartDescriptor {
        let id = self.next_id;
        self.next_id += 1;
        HeartDescriptor::random(id, now_ms, rng)
    }
}
