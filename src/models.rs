use anyhow::{bail, Result};
use serde::Deserialize;

use crate::constants::MAX_MODE_MINUTES;

/// Timer mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// All modes, in switcher order
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Focus => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    pub fn default_minutes(&self) -> u32 {
        match self {
            Mode::Focus => 25,
            Mode::ShortBreak => 5,
            Mode::LongBreak => 15,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }

    /// Footer hint shown under the timer
    pub fn tip(&self) -> &'static str {
        if self.is_break() {
            "Take a deep breath. Relax."
        } else {
            "Time to focus! Eliminate distractions."
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Mode::Focus => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }

    pub fn next(&self) -> Mode {
        match self {
            Mode::Focus => Mode::ShortBreak,
            Mode::ShortBreak => Mode::LongBreak,
            Mode::LongBreak => Mode::Focus,
        }
    }

    pub fn prev(&self) -> Mode {
        match self {
            Mode::Focus => Mode::LongBreak,
            Mode::ShortBreak => Mode::Focus,
            Mode::LongBreak => Mode::ShortBreak,
        }
    }
}

/// Per-mode durations in whole minutes, each in `1..=MAX_MODE_MINUTES`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDurations")]
pub struct Durations {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Durations {
            focus: Mode::Focus.default_minutes(),
            short_break: Mode::ShortBreak.default_minutes(),
            long_break: Mode::LongBreak.default_minutes(),
        }
    }
}

impl Durations {
    pub fn new(focus: u32, short_break: u32, long_break: u32) -> Result<Self> {
        let durations = Durations {
            focus,
            short_break,
            long_break,
        };
        for mode in Mode::ALL {
            let minutes = durations.minutes(mode);
            if minutes == 0 || minutes > MAX_MODE_MINUTES {
                bail!(
                    "{} duration must be between 1 and {} minutes, got {}",
                    mode.label(),
                    MAX_MODE_MINUTES,
                    minutes
                );
            }
        }
        Ok(durations)
    }

    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Focus => self.focus,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    pub fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode) * 60
    }
}

/// Durations as written in the settings file, before range checks
#[derive(Deserialize)]
#[serde(default)]
struct RawDurations {
    focus: u32,
    short_break: u32,
    long_break: u32,
}

impl Default for RawDurations {
    fn default() -> Self {
        let d = Durations::default();
        RawDurations {
            focus: d.focus,
            short_break: d.short_break,
            long_break: d.long_break,
        }
    }
}

impl TryFrom<RawDurations> for Durations {
    type Error = anyhow::Error;

    fn try_from(raw: RawDurations) -> Result<Self> {
        Durations::new(raw.focus, raw.short_break, raw.long_break)
    }
}

/// Where the current run sits in its lifecycle.
///
/// Derived from `TimerState`, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Full duration, not running
    Idle,
    Running,
    /// Part-way through, not running
    Paused,
    /// Counted down to zero; left only via reset or a mode switch
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let d = Durations::default();
        assert_eq!(d.seconds(Mode::Focus), 1500);
        assert_eq!(d.seconds(Mode::ShortBreak), 300);
        assert_eq!(d.seconds(Mode::LongBreak), 900);
    }

    #[test]
    fn test_durations_out_of_range_rejected() {
        assert!(Durations::new(0, 5, 15).is_err());
        assert!(Durations::new(25, 5, MAX_MODE_MINUTES + 1).is_err());
        // Would overflow u32 seconds
        let err = Durations::new(80_000_000, 5, 15).unwrap_err();
        assert!(err.to_string().contains("Pomodoro"));

        let d = Durations::new(1, MAX_MODE_MINUTES, 15).unwrap();
        assert_eq!(d.seconds(Mode::ShortBreak), MAX_MODE_MINUTES * 60);
    }

    #[test]
    fn test_mode_cycle_covers_all() {
        let mut mode = Mode::Focus;
        for expected in Mode::ALL.iter().cycle().skip(1).take(3) {
            mode = mode.next();
            assert_eq!(mode, *expected);
            assert_eq!(mode.next().prev(), mode);
        }
        for (i, m) in Mode::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn test_tip_depends_on_break() {
        assert!(Mode::Focus.tip().contains("focus"));
        assert_eq!(Mode::ShortBreak.tip(), Mode::LongBreak.tip());
    }
}
