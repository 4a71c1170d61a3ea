//! Render state - data structure sent from Timer layer to UI for rendering

use crate::models::{Durations, Mode, Phase};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Timer
    pub mode: Mode,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub is_running: bool,
    pub phase: Phase,
    /// remaining / total, in [0, 1]
    pub progress: f64,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let total = Durations::default().seconds(Mode::Focus);
        RenderState {
            mode: Mode::Focus,
            remaining_seconds: total,
            total_seconds: total,
            is_running: false,
            phase: Phase::Idle,
            progress: 1.0,
            show_help: false,
        }
    }
}
