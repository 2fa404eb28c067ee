//! Pure widget effects logic
//!
//! All decoration, scratch and celebration behavior lives here. This module
//! must stay platform-free:
//! - Injected RNG only
//! - No DOM, canvas or timer calls
//! - Natively testable

pub mod countdown;
pub mod decor;
pub mod fireworks;
pub mod scratch;
pub mod state;

pub use countdown::{Countdown, CountdownDisplay, format_mmss};
pub use decor::{Decoration, generate_decorations};
pub use fireworks::{Particle, burst, burst_schedule};
pub use scratch::{ScratchPhase, ScratchSession};
pub use state::{COIN_IMAGES, FIREWORK_COLORS, RngState};
