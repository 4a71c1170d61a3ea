//! Command handlers - the controller operations
//!
//! These are the only mutations of `TimerState`. Every one is total:
//! the invariants `remaining_seconds <= duration_seconds(mode)` and
//! `is_running => remaining_seconds > 0` hold after each call.

use crate::models::Mode;
use crate::timer::TimerState;

impl TimerState {
    // ========================
    // Mode switcher
    // ========================

    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.remaining_seconds = self.duration_seconds(mode);
        self.is_running = false;
    }

    pub fn next_mode(&mut self) {
        self.select_mode(self.mode.next());
    }

    pub fn prev_mode(&mut self) {
        self.select_mode(self.mode.prev());
    }

    // ========================
    // Countdown controls
    // ========================

    /// Start or pause. Starting a completed run does nothing.
    pub fn toggle_running(&mut self) {
        if !self.is_running && self.remaining_seconds == 0 {
            return;
        }
        self.is_running = !self.is_running;
    }

    pub fn reset(&mut self) {
        self.remaining_seconds = self.duration_seconds(self.mode);
        self.is_running = false;
    }

    /// One second elapsed. Returns true if this tick completed the run.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.is_running = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Durations, Phase};

    fn assert_invariants(state: &TimerState) {
        assert!(state.remaining_seconds <= state.duration_seconds(state.mode));
        if state.is_running {
            assert!(state.remaining_seconds > 0);
        }
        let p = state.progress_fraction();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_initial_state() {
        let state = TimerState::default();
        assert_eq!(state.mode, Mode::Focus);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.progress_fraction(), 1.0);
    }

    #[test]
    fn test_custom_durations_start_idle() {
        let state = TimerState::new(Durations::new(1, 1, 720).unwrap());
        assert_eq!(state.remaining_seconds, 60);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.duration_seconds(Mode::LongBreak), 720 * 60);
    }

    #[test]
    fn test_select_mode_resets_every_mode() {
        let mut state = TimerState::default();
        for mode in Mode::ALL {
            state.toggle_running();
            state.tick();
            state.select_mode(mode);
            assert_eq!(state.remaining_seconds, state.duration_seconds(mode));
            assert!(!state.is_running);
            assert_eq!(state.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_reset_idempotent() {
        let mut state = TimerState::default();
        state.toggle_running();
        for _ in 0..42 {
            state.tick();
        }
        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
        assert_eq!(state.remaining_seconds, 1500);
        assert!(!state.is_running);
    }

    #[test]
    fn test_full_focus_run_completes() {
        let mut state = TimerState::default();
        state.toggle_running();
        assert_eq!(state.phase(), Phase::Running);

        let mut completions = 0;
        for _ in 0..1500 {
            if state.tick() {
                completions += 1;
            }
            assert_invariants(&state);
        }
        assert_eq!(completions, 1);
        assert_eq!(state.remaining_seconds, 0);
        assert!(!state.is_running);
        assert_eq!(state.phase(), Phase::Completed);
        assert_eq!(state.progress_fraction(), 0.0);
    }

    #[test]
    fn test_pause_holds_remaining() {
        let mut state = TimerState::default();
        state.toggle_running();
        for _ in 0..100 {
            state.tick();
        }
        assert_eq!(state.remaining_seconds, 1400);

        state.toggle_running();
        assert!(!state.is_running);
        assert_eq!(state.phase(), Phase::Paused);
        for _ in 0..10 {
            assert!(!state.tick());
        }
        assert_eq!(state.remaining_seconds, 1400);

        state.toggle_running();
        state.tick();
        assert_eq!(state.remaining_seconds, 1399);
    }

    #[test]
    fn test_switch_mid_run() {
        let mut state = TimerState::default();
        state.toggle_running();
        for _ in 0..7 {
            state.tick();
        }
        state.select_mode(Mode::ShortBreak);
        assert_eq!(state.remaining_seconds, 300);
        assert!(!state.is_running);
    }

    #[test]
    fn test_completed_cannot_restart_until_reset() {
        let mut state = TimerState::new(Durations::new(1, 1, 1).unwrap());
        state.toggle_running();
        for _ in 0..60 {
            state.tick();
        }
        assert_eq!(state.remaining_seconds, 0);

        state.toggle_running();
        assert!(!state.is_running);
        assert_eq!(state.phase(), Phase::Completed);

        state.reset();
        assert_eq!(state.remaining_seconds, 60);
        state.toggle_running();
        assert!(state.is_running);
    }

    #[test]
    fn test_extra_ticks_floor_at_zero() {
        let mut state = TimerState::new(Durations::new(1, 5, 15).unwrap());
        state.toggle_running();
        for _ in 0..200 {
            state.tick();
            assert_invariants(&state);
        }
        assert_eq!(state.remaining_seconds, 0);
    }

    #[test]
    fn test_mode_cycling() {
        let mut state = TimerState::default();
        state.next_mode();
        assert_eq!(state.mode, Mode::ShortBreak);
        state.prev_mode();
        state.prev_mode();
        assert_eq!(state.mode, Mode::LongBreak);
        assert_eq!(state.remaining_seconds, 900);
    }

    #[test]
    fn test_invariants_over_mixed_sequence() {
        let mut state = TimerState::default();
        // Deterministic mix of every operation
        for i in 0u32..5000 {
            match i % 97 {
                0 => state.toggle_running(),
                13 => state.reset(),
                41 => state.select_mode(Mode::ALL[(i as usize / 97) % 3]),
                55 | 80 => state.toggle_running(),
                _ => {
                    state.tick();
                }
            }
            assert_invariants(&state);
        }
    }
}
