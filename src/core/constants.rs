// Shared tuning constants for the card: particle field, evasive control,
// celebration burst, confetti physics and card animations.

// Falling hearts
pub const HEART_WINDOW_SIZE: usize = 15; // descriptors alive at any time
pub const HEART_SPAWN_INTERVAL_MS: u64 = 800; // one eviction + one spawn per period

pub const HEART_LEFT_PCT_MIN: f32 = 0.0;
pub const HEART_LEFT_PCT_MAX: f32 = 100.0;
pub const HEART_DELAY_SEC_MIN: f32 = 0.0;
pub const HEART_DELAY_SEC_MAX: f32 = 2.0;
pub const HEART_DURATION_SEC_MIN: f32 = 6.0;
pub const HEART_DURATION_SEC_MAX: f32 = 10.0;
pub const HEART_SIZE_PX_MIN: f32 = 20.0;
pub const HEART_SIZE_PX_MAX: f32 = 60.0;
pub const HEART_OPACITY_MIN: f32 = 0.3;
pub const HEART_OPACITY_MAX: f32 = 1.0;

pub const HEART_START_Y_PX: f32 = -50.0; // just above the viewport
pub const HEART_EXIT_MARGIN_PX: f32 = 100.0; // below the viewport bottom
pub const HEART_ROTATION_DEG: f32 = 360.0;

pub const HEART_PALETTE: [&str; 5] = ["#ff1744", "#ff5252", "#ff6e40", "#ff8a65", "#ffab91"];

// Evasive control
pub const EVASIVE_MAX_OFFSET_PX: f32 = 60.0; // per axis, symmetric around the layout slot
pub const EVASIVE_SPRING_STIFFNESS: f32 = 300.0;
pub const EVASIVE_SPRING_DAMPING: f32 = 15.0;
pub const EVASIVE_SPRING_MASS: f32 = 1.0;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // larger gaps (tab switch) are clamped
pub const SPRING_REST_DISTANCE_PX: f32 = 0.01;
pub const SPRING_REST_SPEED_PX: f32 = 0.01;

// Celebration burst
pub const BURST_DURATION_MS: f64 = 3000.0;
pub const BURST_PARTICLES_PER_FRAME: u32 = 2;
pub const BURST_SPREAD_DEG: f32 = 360.0;
pub const BURST_PALETTE: [&str; 5] = ["#ff1744", "#ff5252", "#ffb3ba", "#ffc0d9", "#ffe5ec"];

// Confetti physics, per animation frame
pub const CONFETTI_START_VELOCITY: f32 = 45.0;
pub const CONFETTI_DECAY: f32 = 0.9;
pub const CONFETTI_GRAVITY_PX: f32 = 3.0;
pub const CONFETTI_TICKS: u32 = 200;
pub const CONFETTI_SCALAR: f32 = 1.0;
pub const CONFETTI_WOBBLE_RADIUS_PX: f32 = 10.0;
pub const CONFETTI_TILT_STEP: f32 = 0.1;
pub const CONFETTI_MAX_PARTICLES: usize = 1500;

// Card animations
pub const PROMPT_HEART_PERIOD_SEC: f32 = 1.5;
pub const PROMPT_HEART_SCALE: [f32; 3] = [1.0, 1.2, 1.0];
pub const CELEBRATION_HEART_PERIOD_SEC: f32 = 0.8;
pub const CELEBRATION_HEART_SCALE: [f32; 3] = [1.0, 1.3, 1.0];
pub const CELEBRATION_HEART_ROTATE_DEG: [f32; 4] = [0.0, 10.0, -10.0, 0.0];

pub const CARD_TRANSITION_MS: f64 = 300.0; // enter and exit each
pub const CARD_HIDDEN_SCALE: f32 = 0.8;
