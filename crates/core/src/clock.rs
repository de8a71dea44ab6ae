//! Round clock - one-second countdown that reports expiry exactly once.

/// Result of a single clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Clock is stopped; nothing changed.
    Stopped,
    /// One second elapsed; this many remain.
    Remaining(u32),
    /// Reached zero on this tick. The clock has stopped itself.
    Expired,
}

/// Countdown timer driven by the host's once-per-second tick.
#[derive(Debug, Clone, Default)]
pub struct RoundClock {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl RoundClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting down from `duration_seconds`.
    pub fn start(&mut self, duration_seconds: u32) {
        self.duration = duration_seconds;
        self.remaining = duration_seconds;
        self.running = true;
    }

    /// Decrement by one second.
    pub fn tick(&mut self) -> ClockTick {
        if !self.running {
            return ClockTick::Stopped;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return ClockTick::Expired;
        }
        ClockTick::Remaining(self.remaining)
    }

    /// Cancel ticking. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and forget the countdown, keeping only the configured duration.
    pub fn clear(&mut self) {
        self.running = false;
        self.remaining = self.duration;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Whole seconds consumed since `start`.
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }
}
