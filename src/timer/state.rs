//! Timer state - pure data structure with no I/O logic

use crate::messages::RenderState;
use crate::models::{Durations, Mode, Phase};

/// Countdown state for one session
#[derive(Clone, Debug, PartialEq)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub is_running: bool,

    // Fixed for the session
    durations: Durations,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}

impl TimerState {
    /// Fresh session: Focus mode, full duration, not running.
    /// `Durations` are range-checked, so this always starts Idle.
    pub fn new(durations: Durations) -> Self {
        TimerState {
            mode: Mode::Focus,
            remaining_seconds: durations.seconds(Mode::Focus),
            is_running: false,
            durations,
        }
    }

    pub fn duration_seconds(&self, mode: Mode) -> u32 {
        self.durations.seconds(mode)
    }

    /// Remaining time as a fraction of the current mode's duration
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.duration_seconds(self.mode))
    }

    pub fn phase(&self) -> Phase {
        if self.is_running {
            Phase::Running
        } else if self.remaining_seconds == 0 {
            Phase::Completed
        } else if self.remaining_seconds == self.duration_seconds(self.mode) {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self, show_help: bool) -> RenderState {
        RenderState {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            total_seconds: self.duration_seconds(self.mode),
            is_running: self.is_running,
            phase: self.phase(),
            progress: self.progress_fraction(),
            show_help,
        }
    }
}
