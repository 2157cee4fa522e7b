//! # Dwell Controller
//!
//! Press/release state machine behind dwell selection. While pressed, each
//! tick recomputes progress from elapsed time; release reports the progress
//! at that instant so the caller can commit.
//!
//! ```text
//!            press(now)
//!   Idle ───────────────▶ Pressing { started }
//!    ▲                        │  tick(now): progress = elapsed / target
//!    └────────────────────────┘
//!            release(now) → Some(progress)
//! ```
//!
//! Time is passed in rather than read, so the host decides the cadence and
//! tests can step the clock exactly. The controller holds no timer of its
//! own: the host ticks only while `is_pressing()`, which makes release the
//! cancellation point.

use std::time::{Duration, Instant};

use crate::core::config::DEFAULT_TARGET_DURATION_MS;

pub const DEFAULT_TARGET_DURATION: Duration = Duration::from_millis(DEFAULT_TARGET_DURATION_MS);

/// Progress value at which the dwell is complete.
pub const MAX_PROGRESS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DwellState {
    Idle,
    Pressing { started: Instant },
}

#[derive(Debug, Clone)]
pub struct DwellController {
    state: DwellState,
    progress: f64,
    target: Duration,
}

impl DwellController {
    /// A zero `target` is replaced with the default.
    pub fn new(target: Duration) -> Self {
        let target = if target.is_zero() {
            DEFAULT_TARGET_DURATION
        } else {
            target
        };
        Self {
            state: DwellState::Idle,
            progress: 0.0,
            target,
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.state, DwellState::Pressing { .. })
    }

    /// Current progress in `[0, 100]`; always 0 while idle.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Starts a dwell. Returns false (and changes nothing) if one is already
    /// in progress.
    pub fn press(&mut self, now: Instant) -> bool {
        if self.is_pressing() {
            return false;
        }
        self.state = DwellState::Pressing { started: now };
        self.progress = 0.0;
        true
    }

    /// Advances progress to `now`. Returns the new progress, or `None` when
    /// idle. Progress saturates at 100 but ticking may continue.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let DwellState::Pressing { started } = self.state else {
            return None;
        };
        self.progress = self.progress_at(started, now);
        Some(self.progress)
    }

    /// Ends the dwell and returns the progress at `now`, or `None` if no
    /// press was active. Progress is reset to 0 afterwards.
    pub fn release(&mut self, now: Instant) -> Option<f64> {
        let DwellState::Pressing { started } = self.state else {
            return None;
        };
        let final_progress = self.progress_at(started, now);
        self.state = DwellState::Idle;
        self.progress = 0.0;
        Some(final_progress)
    }

    fn progress_at(&self, started: Instant, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(started);
        let ratio = elapsed.as_secs_f64() / self.target.as_secs_f64();
        (ratio * MAX_PROGRESS).min(MAX_PROGRESS)
    }
}

impl Default for DwellController {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_DURATION)
    }
}
