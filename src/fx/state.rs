//! Shared effect state: RNG plumbing and fixed palettes

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Coin images the decoration layer picks from
pub const COIN_IMAGES: [&str; 6] = [
    "coin1.png",
    "coin2.png",
    "coin3.png",
    "coin4.png",
    "coin5.png",
    "coin6.png",
];

/// Firework particle colors
pub const FIREWORK_COLORS: [&str; 5] = ["#ffcc00", "#ffffff", "#ffd700", "#ff4500", "#00ff00"];

/// Seed carrier for reproducible effect generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = RngState::new(42).to_rng();
        let mut b = RngState::new(42).to_rng();
        for _ in 0..32 {
            assert_eq!(a.random_range(0u32..1000), b.random_range(0u32..1000));
        }
    }
}
