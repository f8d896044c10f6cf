pub mod anim;
pub mod burst;
pub mod confetti;
pub mod constants;
pub mod evasive;
pub mod hearts;
pub mod proposal;
pub mod rng;
pub mod schedule;
pub mod text;

pub use proposal::*;
