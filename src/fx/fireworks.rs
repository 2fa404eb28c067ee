//! Firework particle bursts

use glam::Vec2;
use rand::Rng;

use super::state::FIREWORK_COLORS;
use crate::consts::*;
use crate::polar_to_cartesian;

/// One celebratory particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Spawn position (viewport px)
    pub pos: Vec2,
    /// Travel vector over one lifetime (px)
    pub vel: Vec2,
    pub color: &'static str,
    pub size: f32,
}

/// Spawn one burst of particles radiating from `origin`
pub fn burst(origin: Vec2, rng: &mut impl Rng) -> Vec<Particle> {
    (0..BURST_PARTICLES)
        .map(|_| {
            let color = FIREWORK_COLORS[rng.random_range(0..FIREWORK_COLORS.len())];
            let size = rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
            Particle {
                pos: origin,
                vel: polar_to_cartesian(speed, angle),
                color,
                size,
            }
        })
        .collect()
}

/// Burst launch times (ms) for a sequence: one immediate burst, then one per
/// `interval_ms` while still inside the `duration_ms` window
pub fn burst_schedule(duration_ms: u32, interval_ms: u32) -> Vec<u32> {
    let mut times = vec![0];
    if interval_ms == 0 {
        return times;
    }
    let mut t = interval_ms;
    while t < duration_ms {
        times.push(t);
        t += interval_ms;
    }
    times
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::RngState;
    use proptest::prelude::*;

    #[test]
    fn test_burst_size() {
        let mut rng = RngState::new(1).to_rng();
        assert_eq!(burst(Vec2::ZERO, &mut rng).len(), BURST_PARTICLES);
    }

    #[test]
    fn test_burst_origin() {
        let mut rng = RngState::new(2).to_rng();
        let origin = Vec2::new(320.0, 240.0);
        for p in burst(origin, &mut rng) {
            assert_eq!(p.pos, origin);
        }
    }

    #[test]
    fn test_schedule_for_five_seconds() {
        let times = burst_schedule(5000, 300);
        assert_eq!(times.len(), 17); // immediate burst + 16 repeats
        assert_eq!(times[0], 0);
        assert_eq!(*times.last().unwrap(), 4800);
        assert!(times.iter().all(|&t| t < 5000));
    }

    #[test]
    fn test_schedule_tiny_windows() {
        assert_eq!(burst_schedule(0, 300), vec![0]);
        assert_eq!(burst_schedule(300, 300), vec![0]);
        assert_eq!(burst_schedule(301, 300), vec![0, 300]);
    }

    proptest! {
        #[test]
        fn prop_particle_ranges(seed in any::<u64>()) {
            let mut rng = RngState::new(seed).to_rng();
            for p in burst(Vec2::ZERO, &mut rng) {
                prop_assert!(FIREWORK_COLORS.contains(&p.color));
                prop_assert!(p.size >= PARTICLE_SIZE_MIN && p.size < PARTICLE_SIZE_MAX);
                let speed = p.vel.length();
                prop_assert!(speed >= PARTICLE_SPEED_MIN - 0.01 && speed < PARTICLE_SPEED_MAX + 0.01);
            }
        }

        #[test]
        fn prop_schedule_stays_inside_window(duration in 0u32..20_000, interval in 1u32..2_000) {
            let times = burst_schedule(duration, interval);
            prop_assert_eq!(times[0], 0);
            for &t in &times[1..] {
                prop_assert!(t < duration);
                prop_assert_eq!(t % interval, 0);
            }
        }
    }
}
