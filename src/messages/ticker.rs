//! Ticker messages - communication between Timer and Ticker layers

/// Commands sent from Timer layer to Ticker layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerCommand {
    /// Begin emitting ticks for a run, one per period
    Start { run_id: u64 },
    /// Stop emitting ticks for a run (ignored if another run is active)
    Stop { run_id: u64 },
    /// Shutdown the ticker actor
    Shutdown,
}

/// Events sent from Ticker layer to Timer layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerEvent {
    /// One period elapsed for the given run
    Tick { run_id: u64 },
}

impl TickerEvent {
    /// Get the run ID this event belongs to
    pub fn run_id(&self) -> u64 {
        match self {
            TickerEvent::Tick { run_id } => *run_id,
        }
    }
}
