use super::constants::*;
use std::f32::consts::PI;

#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    0.5 - 0.5 * (PI * t).cos()
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Looping keyframe track with evenly spaced keys and eased segments.
#[derive(Clone, Copy, Debug)]
pub struct KeyframeLoop {
    pub values: &'static [f32],
    pub period_sec: f32,
}

impl KeyframeLoop {
    pub const fn new(values: &'static [f32], period_sec: f32) -> Self {
        Self { values, period_sec }
    }

    pub fn sample(&self, elapsed_sec: f32) -> f32 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let phase = if self.period_sec > 0.0 {
                    (elapsed_sec / self.period_sec).rem_euclid(1.0)
                } else {
                    0.0
                };
                let segments = (values.len() - 1) as f32;
                let pos = phase * segments;
                let i = (pos.floor() as usize).min(values.len() - 2);
                lerp(values[i], values[i + 1], ease_in_out(pos - i as f32))
            }
        }
    }
}

pub const PROMPT_HEART_PULSE: KeyframeLoop =
    KeyframeLoop::new(&PROMPT_HEART_SCALE, PROMPT_HEART_PERIOD_SEC);
pub const CELEBRATION_HEART_PULSE: KeyframeLoop =
    KeyframeLoop::new(&CELEBRATION_HEART_SCALE, CELEBRATION_HEART_PERIOD_SEC);
pub const CELEBRATION_HEART_WIGGLE: KeyframeLoop =
    KeyframeLoop::new(&CELEBRATION_HEART_ROTATE_DEG, CELEBRATION_HEART_PERIOD_SEC);

/// Opacity and scale applied to a card while it enters or leaves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presence {
    pub opacity: f32,
    pub scale: f32,
}

impl Presence {
    pub const SHOWN: Presence = Presence {
        opacity: 1.0,
        scale: 1.0,
    };
    pub const HIDDEN: Presence = Presence {
        opacity: 0.0,
        scale: CARD_HIDDEN_SCALE,
    };

    /// `progress` 0 is hidden, 1 is fully shown.
    pub fn at(progress: f32) -> Self {
        let t = ease_in_out(progress);
        Self {
            opacity: lerp(Self::HIDDEN.opacity, Self::SHOWN.opacity, t),
            scale: lerp(Self::HIDDEN.scale, Self::SHOWN.scale, t),
        }
    }
}

/// Progress of a transition started at `started_ms` that lasts `duration_ms`.
#[inline]
pub fn transition_progress(started_ms: f64, now_ms: f64, duration_ms: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - started_ms) / duration_ms).clamp(0.0, 1.0) as f32
}
