//! Floating coin decoration generation

use rand::Rng;

use super::state::COIN_IMAGES;
use crate::consts::*;

/// One floating decoration descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// Image file name (encoded at render time)
    pub image: &'static str,
    /// Rendered width (px), height follows the image aspect
    pub size: f32,
    /// Horizontal position (% of container)
    pub x: f32,
    /// Vertical position (% of container)
    pub y: f32,
    /// Float cycle duration (s)
    pub duration: f32,
    /// Animation delay (s), applied negatively so cycles start mid-flight
    pub delay: f32,
    pub opacity: f32,
}

impl Decoration {
    /// CSS animation shorthand for the float cycle
    pub fn animation_value(&self) -> String {
        format!(
            "zeroGravity {}s ease-in-out -{}s infinite alternate",
            self.duration, self.delay
        )
    }
}

/// Generate `count` randomized decoration descriptors
pub fn generate_decorations(count: usize, rng: &mut impl Rng) -> Vec<Decoration> {
    (0..count)
        .map(|_| {
            let image = COIN_IMAGES[rng.random_range(0..COIN_IMAGES.len())];
            Decoration {
                image,
                size: rng.random_range(DECOR_SIZE_MIN..DECOR_SIZE_MAX),
                x: rng.random_range(0.0..DECOR_POS_MAX),
                y: rng.random_range(0.0..DECOR_POS_MAX),
                duration: rng.random_range(DECOR_DURATION_MIN..DECOR_DURATION_MAX),
                delay: rng.random_range(0.0..DECOR_DELAY_MAX),
                opacity: rng.random_range(DECOR_OPACITY_MIN..DECOR_OPACITY_MAX),
            }
        })
        .collect()
}
