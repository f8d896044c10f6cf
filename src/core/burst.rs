use super::constants::*;
use super::rng::RandomSource;
use super::schedule::DeadlineRepeat;
use glam::Vec2;

/// Parameters of one confetti emission.
///
/// - `angle_deg`: launch direction, 90 is straight up
/// - `spread_deg`: cone width around `angle_deg`
/// - `origin`: normalized viewport point, both axes in `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiCall {
    pub particle_count: u32,
    pub angle_deg: f32,
    pub spread_deg: f32,
    pub origin: Vec2,
    pub colors: &'static [&'static str],
}

/// Three-second confetti shower started by accepting the proposal.
///
/// Emits one call per frame until the wall-clock deadline passes.
#[derive(Clone, Debug)]
pub struct BurstSession {
    repeat: DeadlineRepeat,
    emitted: u32,
}

impl BurstSession {
    pub fn start(now_ms: f64) -> Self {
        Self {
            repeat: DeadlineRepeat::start(now_ms, BURST_DURATION_MS),
            emitted: 0,
        }
    }

    /// Call once per animation frame. `None` once the burst is over.
    pub fn next_call<R: RandomSource + ?Sized>(
        &mut self,
        now_ms: f64,
        rng: &mut R,
    ) -> Option<ConfettiCall> {
        let was_finished = self.repeat.is_finished();
        if !self.repeat.poll(now_ms) {
            if !was_finished {
                log::info!("[burst] finished after {} emissions", self.emitted);
            }
            return None;
        }
        self.emitted += 1;
        let angle_deg = rng.range(0.0, 360.0) % 360.0;
        let origin = Vec2::new(rng.range(0.0, 1.0), rng.range(0.0, 1.0));
        Some(ConfettiCall {
            particle_count: BURST_PARTICLES_PER_FRAME,
            angle_deg,
            spread_deg: BURST_SPREAD_DEG,
            origin,
            colors: &BURST_PALETTE,
        })
    }

    pub fn cancel(&mut self) {
        self.repeat.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.repeat.is_finished()
    }

    pub fn end_ms(&self) -> f64 {
        self.repeat.end_ms()
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}
