//! Countdown timer state

/// Countdown in whole seconds.
///
/// The timer only holds state. Periodic scheduling belongs to whoever drives
/// the engine; each scheduled tick calls [`Timer::tick`] once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl Timer {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: 0,
            running: false,
        }
    }

    /// Set the total duration. Ignored while running; returns whether it applied.
    pub fn set_duration(&mut self, seconds: u32) -> bool {
        if self.running {
            return false;
        }
        self.duration = seconds;
        true
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Reset the remaining time to the full duration and start counting.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    /// One-second decrement. `None` when the timer is not running.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(self.remaining)
    }

    /// Remove `seconds` immediately, clamped at zero. `None` when not running.
    pub fn subtract(&mut self, seconds: u32) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(seconds);
        Some(self.remaining)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time_left(&self) -> u32 {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
