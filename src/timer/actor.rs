//! Timer actor - message loop processing UI events and ticks

use tokio::sync::mpsc;

use crate::messages::{RenderState, TickerCommand, TickerEvent, UiEvent};
use crate::models::{Durations, Mode};
use crate::timer::state::TimerState;

/// Timer actor that owns the countdown and drives the ticker
pub struct TimerActor {
    state: TimerState,
    show_help: bool,
    next_run_id: u64,
    /// Run the ticker is currently producing ticks for
    active_run: Option<u64>,
    ticker_tx: mpsc::UnboundedSender<TickerCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl TimerActor {
    pub fn new(
        durations: Durations,
        ticker_tx: mpsc::UnboundedSender<TickerCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        TimerActor {
            state: TimerState::new(durations),
            show_help: false,
            next_run_id: 1,
            active_run: None,
            ticker_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut tick_rx: mpsc::UnboundedReceiver<TickerEvent>,
    ) {
        // Send initial render state
        self.publish();

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    // A closed UI channel counts as quit
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        break;
                    }
                    self.sync_ticker();
                    self.publish();
                }
                Some(event) = tick_rx.recv() => {
                    if self.handle_tick(event) {
                        self.sync_ticker();
                        self.publish();
                    }
                }
                else => break,
            }
        }

        self.stop_ticker();
        let _ = self.ticker_tx.send(TickerCommand::Shutdown);
        tracing::info!("Timer actor stopped");
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Mode switcher
            UiEvent::SelectMode(mode) => self.select_mode(mode),
            UiEvent::NextMode => self.select_mode(self.state.mode.next()),
            UiEvent::PrevMode => self.select_mode(self.state.mode.prev()),

            // Countdown controls
            UiEvent::ToggleRunning => self.state.toggle_running(),
            UiEvent::Reset => {
                self.state.reset();
                tracing::info!(mode = ?self.state.mode, "Timer reset");
            }

            // Popups
            UiEvent::ToggleHelp => self.show_help = !self.show_help,
            UiEvent::CloseHelp => self.show_help = false,

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    fn select_mode(&mut self, mode: Mode) {
        self.state.select_mode(mode);
        tracing::info!(?mode, "Mode selected");
    }

    /// Apply a tick, returns true if state changed
    fn handle_tick(&mut self, event: TickerEvent) -> bool {
        let run_id = event.run_id();
        if self.active_run != Some(run_id) {
            tracing::debug!(run_id, "Dropping stale tick");
            return false;
        }

        if self.state.tick() {
            tracing::info!(mode = ?self.state.mode, run_id, "Run completed");
        }
        true
    }

    /// Start or stop the ticker to follow `is_running`
    fn sync_ticker(&mut self) {
        match (self.state.is_running, self.active_run) {
            (true, None) => {
                let run_id = self.next_run_id;
                self.next_run_id += 1;
                self.active_run = Some(run_id);
                tracing::info!(
                    run_id,
                    mode = ?self.state.mode,
                    remaining = self.state.remaining_seconds,
                    "Run started"
                );
                let _ = self.ticker_tx.send(TickerCommand::Start { run_id });
            }
            (false, Some(run_id)) => {
                if self.state.remaining_seconds > 0 {
                    tracing::info!(run_id, remaining = self.state.remaining_seconds, "Run stopped");
                }
                self.stop_ticker();
            }
            _ => {}
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(run_id) = self.active_run.take() {
            let _ = self.ticker_tx.send(TickerCommand::Stop { run_id });
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state(self.show_help));
    }
}
