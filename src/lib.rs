//! # Focus Flow
//!
//! A terminal Pomodoro timer.
//!
//! ## Features
//! - Three modes: Pomodoro (25 min), Short Break (5 min), Long Break (15 min)
//! - Start / pause / reset countdown
//! - Progress gauge and per-mode tips
//! - Durations configurable in `~/.focus-flow/settings.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - Timer Layer (State machine)
//! - Ticker Layer (Tokio interval)

pub mod constants;
pub mod models;
pub mod storage;
pub mod ui;
pub mod messages;
pub mod timer;
pub mod ticker;

// Re-export commonly used types
pub use models::{Durations, Mode, Phase};
pub use storage::Settings;
pub use messages::{UiEvent, TickerCommand, TickerEvent, RenderState};
pub use timer::{TimerState, TimerActor};
pub use ticker::TickerActor;
