//! Scratch Promo - a scratch-to-reveal promotional widget
//!
//! Core modules:
//! - `fx`: Pure widget logic (decorations, scratch state, fireworks, countdown)
//! - `reveal_flag`: Persisted "already revealed" flag
//! - `settings`: Widget preferences
//! - `timers`: Owned browser interval/timeout handles (wasm only)

pub mod fx;
pub mod reveal_flag;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod timers;

pub use reveal_flag::RevealFlag;
pub use settings::Settings;

use glam::Vec2;

/// Widget tuning constants
pub mod consts {
    /// Number of floating coin decorations spawned at startup
    pub const DECOR_COUNT: usize = 15;
    /// Decoration size range (px)
    pub const DECOR_SIZE_MIN: f32 = 80.0;
    pub const DECOR_SIZE_MAX: f32 = 180.0;
    /// Decoration position range (% of container, both axes)
    pub const DECOR_POS_MAX: f32 = 100.0;
    /// Decoration float animation duration range (s)
    pub const DECOR_DURATION_MIN: f32 = 15.0;
    pub const DECOR_DURATION_MAX: f32 = 30.0;
    /// Decoration animation delay range (s)
    pub const DECOR_DELAY_MAX: f32 = 5.0;
    /// Decoration opacity range
    pub const DECOR_OPACITY_MIN: f32 = 0.7;
    pub const DECOR_OPACITY_MAX: f32 = 1.0;

    /// Radius of one erased circle (canvas units)
    pub const ERASE_RADIUS: f64 = 20.0;
    /// Reveal progress samples every Nth pixel of the overlay
    pub const SAMPLE_STRIDE: usize = 10;
    /// Transparent fraction of sampled pixels that completes the reveal
    pub const REVEAL_THRESHOLD: f32 = 0.40;
    /// Overlay fade-out duration before it is hidden (ms)
    pub const FADE_OUT_MS: i32 = 500;

    /// Countdown shown in the toast (s)
    pub const TOAST_SECONDS: u32 = 3600;

    /// Particles per firework burst
    pub const BURST_PARTICLES: usize = 60;
    /// Particle size range (px)
    pub const PARTICLE_SIZE_MIN: f32 = 3.0;
    pub const PARTICLE_SIZE_MAX: f32 = 9.0;
    /// Particle travel distance range over one lifetime (px)
    pub const PARTICLE_SPEED_MIN: f32 = 60.0;
    pub const PARTICLE_SPEED_MAX: f32 = 210.0;
    /// Particle lifetime before removal (ms)
    pub const PARTICLE_LIFETIME_MS: i32 = 1000;
    /// Delay between repeated bursts (ms)
    pub const BURST_INTERVAL_MS: i32 = 300;
    /// Total window during which bursts are launched (ms)
    pub const FIREWORKS_DURATION_MS: i32 = 5000;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
