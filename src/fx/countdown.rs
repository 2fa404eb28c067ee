//! Countdown state for the promo toast

/// What the countdown display should show after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownDisplay {
    Running(String),
    Expired,
}

impl CountdownDisplay {
    pub fn text(&self) -> &str {
        match self {
            CountdownDisplay::Running(text) => text,
            CountdownDisplay::Expired => "EXPIRED",
        }
    }
}

/// Second-resolution countdown, decremented once per timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advance one second and report what to display. Expiry is terminal;
    /// ticking an expired countdown keeps returning `Expired`.
    pub fn tick(&mut self) -> CountdownDisplay {
        if self.remaining == 0 {
            return CountdownDisplay::Expired;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            CountdownDisplay::Expired
        } else {
            CountdownDisplay::Running(format_mmss(self.remaining))
        }
    }
}

/// Zero-padded MM:SS
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_of_hour() {
        let mut countdown = Countdown::new(3600);
        assert_eq!(countdown.tick().text(), "59:59");
        assert_eq!(countdown.remaining(), 3599);
    }

    #[test]
    fn test_expires_after_full_duration() {
        let mut countdown = Countdown::new(3600);
        let mut last = countdown.tick();
        for _ in 1..3600 {
            last = countdown.tick();
        }
        assert_eq!(last, CountdownDisplay::Expired);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_last_running_tick_shows_one_second() {
        let mut countdown = Countdown::new(66);
        let mut display = countdown.tick();
        for _ in 1..65 {
            display = countdown.tick();
        }
        assert_eq!(display, CountdownDisplay::Running("00:01".to_string()));
        assert_eq!(countdown.tick(), CountdownDisplay::Expired);
    }

    #[test]
    fn test_expiry_is_terminal() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), CountdownDisplay::Expired);
        assert_eq!(countdown.tick(), CountdownDisplay::Expired);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_zero_duration_is_already_expired() {
        let mut countdown = Countdown::new(0);
        assert_eq!(countdown.tick(), CountdownDisplay::Expired);
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_mmss(3599), "59:59");
        assert_eq!(format_mmss(605), "10:05");
        assert_eq!(format_mmss(65), "01:05");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(0), "00:00");
    }
}
