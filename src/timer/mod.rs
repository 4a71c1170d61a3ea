//! Timer layer - the countdown controller and its message loop
//!
//! The Timer actor receives UI events and ticks, updates the
//! controller state, and emits ticker commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::TimerState;
pub use actor::TimerActor;
