//! Scratch-reveal state machine
//!
//! Single owner of all mutable scratch state. The event layer feeds pointer
//! activity through `press`/`release`/`attempt_erase` and pixel buffers
//! through `check_reveal_threshold`; rendering stays with the caller.

use glam::Vec2;

use crate::consts::*;

/// Reveal progress phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchPhase {
    Unrevealed,
    /// Terminal. Input and sampling are ignored from here on.
    Revealed,
}

/// Scratch-card state owner
#[derive(Debug, Clone)]
pub struct ScratchSession {
    phase: ScratchPhase,
    held: bool,
}

impl ScratchSession {
    /// `already_revealed` comes from the persisted flag and skips straight
    /// to the terminal phase (returning-visitor path).
    pub fn new(already_revealed: bool) -> Self {
        let phase = if already_revealed {
            ScratchPhase::Revealed
        } else {
            ScratchPhase::Unrevealed
        };
        Self { phase, held: false }
    }

    pub fn phase(&self) -> ScratchPhase {
        self.phase
    }

    pub fn revealed(&self) -> bool {
        self.phase == ScratchPhase::Revealed
    }

    /// Pointer/touch pressed on the overlay
    pub fn press(&mut self) {
        self.held = true;
    }

    /// Pointer/touch released or left the overlay
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Gate an erase at `point`. Returns the point to erase while input is
    /// held and the card is unrevealed; the canvas clips the erased circle
    /// to the overlay bounds.
    pub fn attempt_erase(&mut self, point: Vec2) -> Option<Vec2> {
        if !self.held || self.revealed() {
            return None;
        }
        Some(point)
    }

    /// Sample `rgba` (RGBA8 overlay pixels) at every `SAMPLE_STRIDE`th pixel
    /// and transition to Revealed once the fully-transparent fraction of the
    /// samples exceeds `REVEAL_THRESHOLD`. Returns true only on the call
    /// that performs the transition.
    pub fn check_reveal_threshold(&mut self, rgba: &[u8]) -> bool {
        if self.revealed() {
            return false;
        }

        let mut transparent = 0usize;
        let mut total = 0usize;
        for alpha in rgba.iter().skip(3).step_by(4 * SAMPLE_STRIDE) {
            total += 1;
            if *alpha == 0 {
                transparent += 1;
            }
        }
        if total == 0 {
            return false;
        }

        if transparent as f32 / total as f32 > REVEAL_THRESHOLD {
            self.phase = ScratchPhase::Revealed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RGBA buffer with `total` sampled pixels, the first `transparent` of
    /// them fully transparent
    fn sampled_buffer(total: usize, transparent: usize) -> Vec<u8> {
        let mut data = vec![255u8; total * 4 * SAMPLE_STRIDE];
        for i in 0..transparent {
            data[i * 4 * SAMPLE_STRIDE + 3] = 0;
        }
        data
    }

    #[test]
    fn test_threshold_crossed_at_45_percent() {
        let mut session = ScratchSession::new(false);
        assert!(session.check_reveal_threshold(&sampled_buffer(100, 45)));
        assert_eq!(session.phase(), ScratchPhase::Revealed);
    }

    #[test]
    fn test_threshold_not_crossed_at_35_percent() {
        let mut session = ScratchSession::new(false);
        assert!(!session.check_reveal_threshold(&sampled_buffer(100, 35)));
        assert_eq!(session.phase(), ScratchPhase::Unrevealed);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut session = ScratchSession::new(false);
        assert!(!session.check_reveal_threshold(&sampled_buffer(100, 40)));
        assert!(session.check_reveal_threshold(&sampled_buffer(100, 41)));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut session = ScratchSession::new(false);
        let buffer = sampled_buffer(100, 80);
        assert!(session.check_reveal_threshold(&buffer));
        assert!(!session.check_reveal_threshold(&buffer));
        assert!(!session.check_reveal_threshold(&buffer));
        assert!(session.revealed());
    }

    #[test]
    fn test_non_sampled_pixels_ignored() {
        // All transparency sits between sample points
        let mut data = vec![255u8; 100 * 4 * SAMPLE_STRIDE];
        for (i, byte) in data.iter_mut().enumerate() {
            if i % 4 == 3 && (i / 4) % SAMPLE_STRIDE != 0 {
                *byte = 0;
            }
        }
        let mut session = ScratchSession::new(false);
        assert!(!session.check_reveal_threshold(&data));
    }

    #[test]
    fn test_erase_requires_held() {
        let mut session = ScratchSession::new(false);
        let p = Vec2::new(10.0, 10.0);
        assert_eq!(session.attempt_erase(p), None);
        session.press();
        assert_eq!(session.attempt_erase(p), Some(p));
        session.release();
        assert_eq!(session.attempt_erase(p), None);
    }

    #[test]
    fn test_erase_blocked_after_reveal() {
        let mut session = ScratchSession::new(false);
        session.press();
        assert!(session.check_reveal_threshold(&sampled_buffer(10, 10)));
        assert_eq!(session.attempt_erase(Vec2::ZERO), None);
    }

    #[test]
    fn test_already_revealed_start() {
        let mut session = ScratchSession::new(true);
        assert!(session.revealed());
        session.press();
        assert_eq!(session.attempt_erase(Vec2::ZERO), None);
        assert!(!session.check_reveal_threshold(&sampled_buffer(10, 10)));
    }

    #[test]
    fn test_empty_buffer_no_reveal() {
        let mut session = ScratchSession::new(false);
        assert!(!session.check_reveal_threshold(&[]));
    }
}
