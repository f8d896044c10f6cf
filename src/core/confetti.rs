use super::burst::ConfettiCall;
use super::constants::*;
use super::rng::RandomSource;
use glam::Vec2;
use std::f32::consts::PI;

/// A single confetti flake, stepped once per animation frame.
#[derive(Clone, Debug)]
pub struct ConfettiParticle {
    pub position: Vec2,
    pub heading: f32,
    pub velocity: f32,
    pub wobble: f32,
    pub wobble_speed: f32,
    pub tilt_angle: f32,
    pub tilt_jitter: f32,
    pub tick: u32,
    pub total_ticks: u32,
    pub color: &'static str,
}

impl ConfettiParticle {
    pub fn launch<R: RandomSource + ?Sized>(
        origin_px: Vec2,
        angle_deg: f32,
        spread_deg: f32,
        color: &'static str,
        rng: &mut R,
    ) -> Self {
        let angle = angle_deg.to_radians();
        let spread = spread_deg.to_radians();
        Self {
            position: origin_px,
            heading: -angle + (0.5 * spread - rng.next_unit() * spread),
            velocity: CONFETTI_START_VELOCITY * 0.5 + rng.next_unit() * CONFETTI_START_VELOCITY,
            wobble: rng.next_unit() * 10.0,
            wobble_speed: (rng.next_unit() * 0.1 + 0.05).min(0.11),
            tilt_angle: (rng.next_unit() * 0.5 + 0.25) * PI,
            tilt_jitter: rng.next_unit() + 2.0,
            tick: 0,
            total_ticks: CONFETTI_TICKS,
            color,
        }
    }

    /// Advance one frame. Returns false when expired.
    pub fn tick(&mut self) -> bool {
        self.position.x += self.heading.cos() * self.velocity;
        self.position.y += self.heading.sin() * self.velocity + CONFETTI_GRAVITY_PX;
        self.velocity *= CONFETTI_DECAY;
        self.wobble += self.wobble_speed;
        self.tilt_angle += CONFETTI_TILT_STEP;
        self.tick += 1;
        self.tick < self.total_ticks
    }

    pub fn alpha(&self) -> f32 {
        (1.0 - self.tick as f32 / self.total_ticks as f32).clamp(0.0, 1.0)
    }

    /// Corners of the fluttering quad, in canvas pixels.
    pub fn quad(&self) -> [Vec2; 4] {
        let r = CONFETTI_WOBBLE_RADIUS_PX * CONFETTI_SCALAR;
        let wobble = Vec2::new(
            self.position.x + r * self.wobble.cos(),
            self.position.y + r * self.wobble.sin(),
        );
        let tilt = Vec2::new(self.tilt_angle.cos(), self.tilt_angle.sin()) * self.tilt_jitter;
        let p1 = self.position + tilt;
        let p2 = wobble + tilt;
        [
            self.position,
            Vec2::new(wobble.x, p1.y),
            p2,
            Vec2::new(p1.x, wobble.y),
        ]
    }
}

/// All live confetti on the overlay canvas.
#[derive(Clone, Debug, Default)]
pub struct ConfettiSystem {
    particles: Vec<ConfettiParticle>,
}

impl ConfettiSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the particles described by `call` inside a viewport of `viewport_px`.
    pub fn fire<R: RandomSource + ?Sized>(&mut self, call: &ConfettiCall, viewport_px: Vec2, rng: &mut R) {
        if call.colors.is_empty() {
            return;
        }
        let origin_px = call.origin * viewport_px;
        for _ in 0..call.particle_count {
            if self.particles.len() >= CONFETTI_MAX_PARTICLES {
                break;
            }
            let color = call.colors[rng.index(call.colors.len())];
            self.particles.push(ConfettiParticle::launch(
                origin_px,
                call.angle_deg,
                call.spread_deg,
                color,
                rng,
            ));
        }
    }

    pub fn tick(&mut self) {
        self.particles.retain_mut(|p| p.tick());
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
