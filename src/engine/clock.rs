//! Fixed-interval animation clock.
//!
//! Delivers frame indices `0..total_frames` one at a time, at most once per
//! `interval`, after an explicit [`AnimationClock::start`]. A start while a
//! run is in flight is ignored, so there is never more than one sequence.

use std::time::{Duration, Instant};

/// Lifecycle of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    /// Never started.
    Idle,
    /// Delivering frames.
    Running,
    /// All frames of the last run delivered.
    Complete,
}

/// Frame clock for one animation.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    /// Minimum spacing between deliveries.
    interval: Duration,
    /// Frames per run.
    total_frames: u32,
    /// Current lifecycle state.
    state: ClockState,
    /// Next frame to deliver.
    next_frame: u32,
    /// When the previous frame was delivered.
    last_tick: Option<Instant>,
    /// Runs started over the clock's lifetime.
    runs_started: u64,
}

impl AnimationClock {
    /// Create an idle clock.
    #[must_use]
    pub const fn new(interval: Duration, total_frames: u32) -> Self {
        Self {
            interval,
            total_frames,
            state: ClockState::Idle,
            next_frame: 0,
            last_tick: None,
            runs_started: 0,
        }
    }

    /// Tick interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Frames per run.
    #[must_use]
    pub const fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ClockState {
        self.state
    }

    /// Whether a run is in flight.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running)
    }

    /// Frames delivered in the current (or last) run.
    #[must_use]
    pub const fn frames_delivered(&self) -> u32 {
        self.next_frame
    }

    /// Runs started over the clock's lifetime.
    #[must_use]
    pub const fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Begin a run.
    ///
    /// Returns `false` (and changes nothing) if a run is already in flight.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = if self.total_frames == 0 {
            ClockState::Complete
        } else {
            ClockState::Running
        };
        self.next_frame = 0;
        self.last_tick = None;
        self.runs_started += 1;
        true
    }

    /// Deliver the next frame if one is due at `now`.
    ///
    /// The first frame of a run is due immediately.
    pub fn next_frame(&mut self, now: Instant) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        if let Some(last) = self.last_tick {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_tick = Some(now);
        self.deliver()
    }

    /// Deliver the next frame regardless of timing.
    pub fn advance(&mut self) -> Option<u32> {
        if !self.is_running() {
            return None;
        }
        self.deliver()
    }

    /// Time left until the next frame is due (zero if due or idle).
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match (self.state, self.last_tick) {
            (ClockState::Running, Some(last)) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            _ => Duration::ZERO,
        }
    }

    fn deliver(&mut self) -> Option<u32> {
        let frame = self.next_frame;
        self.next_frame += 1;
        if self.next_frame >= self.total_frames {
            self.state = ClockState::Complete;
        }
        Some(frame)
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(50), 100)
    }
}
