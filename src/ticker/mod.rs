//! Ticker layer - the periodic driver, running on the Tokio runtime

pub mod actor;

pub use actor::TickerActor;
