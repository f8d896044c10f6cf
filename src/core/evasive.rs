use super::constants::*;
use super::rng::RandomSource;
use glam::Vec2;

/// Damped spring coefficients (force = -k·x - c·v).
#[derive(Clone, Copy, Debug)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: EVASIVE_SPRING_STIFFNESS,
            damping: EVASIVE_SPRING_DAMPING,
            mass: EVASIVE_SPRING_MASS,
        }
    }
}

impl SpringParams {
    /// Below 1 the spring overshoots and bounces.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// 2D spring that chases a target point.
#[derive(Clone, Debug, Default)]
pub struct SpringMotion {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl SpringMotion {
    pub fn step(&mut self, dt_sec: f32, params: &SpringParams) {
        let dt_sec = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        if dt_sec <= 0.0 || self.is_at_rest() {
            return;
        }
        let substeps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / substeps as f32;
        let inv_mass = 1.0 / params.mass.max(1e-6);
        for _ in 0..substeps {
            let displacement = self.position - self.target;
            let accel = (-params.stiffness * displacement - params.damping * self.velocity) * inv_mass;
            // semi-implicit Euler
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.position.distance(self.target) < SPRING_REST_DISTANCE_PX
            && self.velocity.length() < SPRING_REST_SPEED_PX
    }
}

/// The "decline" button that jumps away from the pointer.
///
/// `offset` is the logical position relative to the layout slot and only
/// changes on proximity events. The rendered position trails it through a
/// bouncy spring.
#[derive(Clone, Debug, Default)]
pub struct EvasiveControl {
    offset: Vec2,
    motion: SpringMotion,
    params: SpringParams,
    relocations: u32,
}

impl EvasiveControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer hover, touch-start and focus all land here.
    pub fn on_proximity<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Vec2 {
        let x = rng.range(-EVASIVE_MAX_OFFSET_PX, EVASIVE_MAX_OFFSET_PX);
        let y = rng.range(-EVASIVE_MAX_OFFSET_PX, EVASIVE_MAX_OFFSET_PX);
        self.offset = Vec2::new(x, y);
        self.motion.target = self.offset;
        self.relocations += 1;
        log::debug!(
            "[evasive] relocation {} -> ({:.1}, {:.1})",
            self.relocations,
            x,
            y
        );
        self.offset
    }

    /// Direct activation has no effect on the card.
    pub fn on_activate(&self) {
        log::info!("[evasive] activation ignored after {} relocations", self.relocations);
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.motion.step(dt_sec, &self.params);
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Where the button is drawn this frame.
    pub fn rendered(&self) -> Vec2 {
        self.motion.position
    }

    pub fn relocations(&self) -> u32 {
        self.relocations
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }
}
