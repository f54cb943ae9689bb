// Native tests for the celebration particle simulation. The sim takes an
// injected RNG, so a fixed Pcg32 seed makes every burst reproducible.

use phonics_pages::fireworks::engine::{
    BURST_COUNT, CelebrationSim, GRAVITY, INITIAL_BURSTS, Particle, Phase,
};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const W: f64 = 1280.0;
const H: f64 = 720.0;

fn sim() -> CelebrationSim<Pcg32> {
    CelebrationSim::new(Pcg32::seed_from_u64(42))
}

#[test]
fn trigger_fires_exactly_four_bursts() {
    let mut s = sim();
    s.trigger(W, H);
    assert_eq!(s.phase(), Phase::Active);
    assert_eq!(s.particles().len(), INITIAL_BURSTS * BURST_COUNT);
}

#[test]
fn burst_particles_stay_within_tuned_ranges() {
    let mut s = sim();
    s.trigger(W, H);
    for p in s.particles() {
        assert_eq!(p.age, 0);
        assert!(p.x >= 0.15 * W && p.x <= 0.85 * W, "origin x {}", p.x);
        assert!(p.y >= 0.15 * H && p.y <= 0.55 * H, "origin y {}", p.y);
        let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
        assert!(speed >= 2.0 && speed < 6.0, "speed {speed}");
        assert!(p.life >= 40.0 && p.life < 70.0, "lifetime {}", p.life);
        assert!(p.radius >= 1.5 && p.radius < 3.5, "radius {}", p.radius);
    }
}

#[test]
fn each_burst_spans_a_full_circle() {
    let mut s = sim();
    s.trigger(W, H);
    let first = &s.particles()[..BURST_COUNT];
    // Velocity angles are evenly distributed; the i-th particle sits at
    // angle TAU * i / count regardless of its random speed.
    for (i, p) in first.iter().enumerate() {
        let expected = std::f64::consts::TAU * (i as f64 / BURST_COUNT as f64);
        let angle = p.vy.atan2(p.vx).rem_euclid(std::f64::consts::TAU);
        assert!(
            (angle - expected).abs() < 1e-9 || (angle - expected).abs() > std::f64::consts::TAU - 1e-9,
            "particle {i} angle {angle} expected {expected}"
        );
    }
}

#[test]
fn advance_applies_gravity_and_ages_particles() {
    let mut s = sim();
    s.trigger(W, H);
    let before: Vec<(f64, f64, f64, f64)> = s
        .particles()
        .iter()
        .map(|p| (p.x, p.y, p.vx, p.vy))
        .collect();
    s.advance();
    for (p, (x, y, vx, vy)) in s.particles().iter().zip(before) {
        assert_eq!(p.age, 1);
        assert!((p.x - (x + vx)).abs() < 1e-12);
        assert!((p.y - (y + vy)).abs() < 1e-12);
        assert!((p.vy - (vy + GRAVITY)).abs() < 1e-12);
    }
}

#[test]
fn no_particle_outlives_its_lifetime() {
    let mut s = sim();
    s.trigger(W, H);
    for _ in 0..500 {
        s.advance();
        for p in s.particles() {
            assert!((p.age as f64) < p.life, "age {} >= life {}", p.age, p.life);
            assert!(p.opacity() > 0.0);
        }
    }
}

#[test]
fn stop_right_after_trigger_discards_everything() {
    let mut s = sim();
    s.trigger(W, H);
    s.stop();
    assert_eq!(s.phase(), Phase::Dormant);
    assert!(s.particles().is_empty());
    // A stray advance after stop must not repopulate or step anything.
    s.advance();
    assert!(s.particles().is_empty());
}

#[test]
fn stop_while_dormant_is_a_noop() {
    let mut s = sim();
    s.stop();
    assert_eq!(s.phase(), Phase::Dormant);
    assert!(s.particles().is_empty());
}

#[test]
fn advance_with_zero_live_particles_is_a_valid_steady_state() {
    let mut s = sim();
    s.trigger(W, H);
    // Run long enough for every particle of the initial volley to expire;
    // probabilistic respawns keep the sim alive, which is fine. Just assert
    // stepping never misbehaves, populated or not.
    for _ in 0..2000 {
        s.advance();
    }
    assert_eq!(s.phase(), Phase::Active);
}

#[test]
fn opacity_decays_linearly() {
    let p = Particle {
        x: 0.0,
        y: 0.0,
        vx: 0.0,
        vy: 0.0,
        age: 30,
        life: 60.0,
        radius: 2.0,
    };
    assert_eq!(p.opacity(), 0.5);
    let fresh = Particle { age: 0, ..p };
    assert_eq!(fresh.opacity(), 1.0);
    let spent = Particle { age: 60, ..p };
    assert_eq!(spent.opacity(), 0.0);
}

#[test]
fn hue_is_proportional_to_horizontal_position() {
    let p = Particle {
        x: W / 2.0,
        y: 0.0,
        vx: 0.0,
        vy: 0.0,
        age: 0,
        life: 50.0,
        radius: 2.0,
    };
    assert_eq!(p.hue(W), 180.0);
    let left = Particle { x: 0.0, ..p };
    assert_eq!(left.hue(W), 0.0);
}

#[test]
fn same_seed_replays_the_same_celebration() {
    let mut a = CelebrationSim::new(Pcg32::seed_from_u64(9));
    let mut b = CelebrationSim::new(Pcg32::seed_from_u64(9));
    a.trigger(W, H);
    b.trigger(W, H);
    for _ in 0..100 {
        a.advance();
        b.advance();
    }
    assert_eq!(a.particles().len(), b.particles().len());
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.x, pb.x);
        assert_eq!(pa.y, pb.y);
        assert_eq!(pa.life, pb.life);
    }
}

#[test]
fn resize_retunes_burst_origins() {
    let mut s = sim();
    s.trigger(W, H);
    s.stop();
    s.resize(100.0, 100.0);
    s.trigger(100.0, 100.0);
    for p in s.particles() {
        assert!(p.x >= 15.0 && p.x <= 85.0);
        assert!(p.y >= 15.0 && p.y <= 55.0);
    }
}
