//! Ticker actor - emits one tick per period for the active run

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::messages::{TickerCommand, TickerEvent};

/// The run currently being ticked
struct ActiveRun {
    run_id: u64,
    interval: Interval,
}

/// Ticker actor that turns Start/Stop commands into a stream of ticks
pub struct TickerActor {
    period: Duration,
    event_tx: mpsc::UnboundedSender<TickerEvent>,
}

impl TickerActor {
    pub fn new(period: Duration, event_tx: mpsc::UnboundedSender<TickerEvent>) -> Self {
        TickerActor { period, event_tx }
    }

    /// Run the ticker actor message loop
    pub async fn run(self, mut cmd_rx: mpsc::UnboundedReceiver<TickerCommand>) {
        let mut active: Option<ActiveRun> = None;

        loop {
            tokio::select! {
                biased;

                // Commands first, so a Stop beats a pending tick
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(TickerCommand::Start { run_id }) => {
                            // First tick one full period after the start
                            let mut interval = time::interval_at(Instant::now() + self.period, self.period);
                            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                            tracing::info!(run_id, "Ticker started");
                            active = Some(ActiveRun { run_id, interval });
                        }
                        Some(TickerCommand::Stop { run_id }) => {
                            if active.as_ref().is_some_and(|run| run.run_id == run_id) {
                                tracing::info!(run_id, "Ticker stopped");
                                active = None;
                            }
                        }
                        Some(TickerCommand::Shutdown) | None => {
                            tracing::info!("Ticker actor shutting down");
                            break;
                        }
                    }
                }

                run_id = next_tick(&mut active), if active.is_some() => {
                    if self.event_tx.send(TickerEvent::Tick { run_id }).is_err() {
                        break;
                    }
                }
            }
        }
    }
}

async fn next_tick(active: &mut Option<ActiveRun>) -> u64 {
    match active {
        Some(run) => {
            run.interval.tick().await;
            run.run_id
        }
        None => std::future::pending().await,
    }
}
