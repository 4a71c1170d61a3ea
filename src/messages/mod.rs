//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, Timer, and Ticker layers.

pub mod ui_events;
pub mod ticker;
pub mod render;

pub use ui_events::UiEvent;
pub use ticker::{TickerCommand, TickerEvent};
pub use render::RenderState;
