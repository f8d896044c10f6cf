// Host-side tests for the burst session and confetti physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod burst {
        include!("../src/core/burst.rs");
    }
    pub mod confetti {
        include!("../src/core/confetti.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod rng {
        include!("../src/core/rng.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use card::burst::*;
use card::confetti::*;
use card::constants::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn call(count: u32) -> ConfettiCall {
    ConfettiCall {
        particle_count: count,
        angle_deg: 90.0,
        spread_deg: BURST_SPREAD_DEG,
        origin: Vec2::new(0.5, 0.25),
        colors: &BURST_PALETTE,
    }
}

#[test]
fn burst_calls_use_fixed_parameters() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut burst = BurstSession::start(0.0);
    for i in 0..100 {
        let c = burst
            .next_call(i as f64 * 16.0, &mut rng)
            .expect("inside the burst window");
        assert_eq!(c.particle_count, BURST_PARTICLES_PER_FRAME);
        assert_eq!(c.spread_deg, 360.0);
        assert!((0.0..360.0).contains(&c.angle_deg), "angle {}", c.angle_deg);
        assert!((0.0..=1.0).contains(&c.origin.x));
        assert!((0.0..=1.0).contains(&c.origin.y));
        assert_eq!(c.colors, &BURST_PALETTE[..]);
    }
    assert_eq!(burst.emitted(), 100);
}

#[test]
fn burst_stops_after_deadline_and_stays_stopped() {
    let mut rng = StdRng::seed_from_u64(18);
    let mut burst = BurstSession::start(1_000.0);
    assert_eq!(burst.end_ms(), 1_000.0 + BURST_DURATION_MS);
    assert!(burst.next_call(4_000.0, &mut rng).is_some());
    assert!(burst.next_call(4_001.0, &mut rng).is_none());
    assert!(burst.is_finished());
    for t in [4_002.0, 10_000.0, 2_000.0] {
        assert!(burst.next_call(t, &mut rng).is_none());
    }
    assert_eq!(burst.emitted(), 1);
}

#[test]
fn cancelled_burst_emits_nothing() {
    let mut rng = StdRng::seed_from_u64(19);
    let mut burst = BurstSession::start(0.0);
    burst.cancel();
    assert!(burst.next_call(1.0, &mut rng).is_none());
}

#[test]
fn fire_spawns_particles_at_origin() {
    let mut rng = StdRng::seed_from_u64(20);
    let mut system = ConfettiSystem::new();
    system.fire(&call(2), Vec2::new(1000.0, 800.0), &mut rng);
    assert_eq!(system.particles().len(), 2);
    for p in system.particles() {
        assert_eq!(p.position, Vec2::new(500.0, 200.0));
        assert!(BURST_PALETTE.contains(&p.color));
        assert!(p.velocity >= CONFETTI_START_VELOCITY * 0.5);
        assert!(p.velocity <= CONFETTI_START_VELOCITY * 1.5);
        assert_eq!(p.alpha(), 1.0);
    }
}

#[test]
fn empty_palette_fires_nothing() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut system = ConfettiSystem::new();
    let mut c = call(4);
    c.colors = &[];
    system.fire(&c, Vec2::new(100.0, 100.0), &mut rng);
    assert!(system.is_empty());
}

#[test]
fn particles_fade_and_expire_after_lifetime() {
    let mut rng = StdRng::seed_from_u64(22);
    let mut system = ConfettiSystem::new();
    system.fire(&call(10), Vec2::new(400.0, 400.0), &mut rng);

    for _ in 0..(CONFETTI_TICKS / 2) {
        system.tick();
    }
    assert_eq!(system.particles().len(), 10);
    for p in system.particles() {
        assert!((p.alpha() - 0.5).abs() < 1e-5);
    }

    for _ in 0..(CONFETTI_TICKS / 2) {
        system.tick();
    }
    assert!(system.is_empty());
}

#[test]
fn gravity_wins_once_velocity_decays() {
    let mut rng = StdRng::seed_from_u64(23);
    let mut particle =
        ConfettiParticle::launch(Vec2::new(0.0, 0.0), 90.0, 0.0, BURST_PALETTE[0], &mut rng);
    // straight up first
    particle.tick();
    assert!(particle.position.y < 0.0);
    for _ in 0..100 {
        particle.tick();
    }
    let y_before = particle.position.y;
    particle.tick();
    assert!(particle.position.y > y_before, "should be falling");
    assert!(particle.position.x.abs() < 1e-2);
}

#[test]
fn particle_count_is_capped() {
    let mut rng = StdRng::seed_from_u64(24);
    let mut system = ConfettiSystem::new();
    system.fire(&call(CONFETTI_MAX_PARTICLES as u32 + 50), Vec2::new(10.0, 10.0), &mut rng);
    assert_eq!(system.particles().len(), CONFETTI_MAX_PARTICLES);
    system.clear();
    assert!(system.is_empty());
}

#[test]
fn quad_corners_surround_the_particle() {
    let mut rng = StdRng::seed_from_u64(25);
    let particle =
        ConfettiParticle::launch(Vec2::new(50.0, 50.0), 45.0, 360.0, BURST_PALETTE[1], &mut rng);
    let quad = particle.quad();
    assert_eq!(quad[0], particle.position);
    for corner in quad {
        assert!(corner.distance(particle.position) < 3.0 * CONFETTI_WOBBLE_RADIUS_PX);
    }
}
