//! Focus Flow - Actor-based terminal Pomodoro timer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - Timer Layer - countdown state machine processing events
//! - Ticker Layer (Tokio) - periodic one-second driver

mod models;
mod storage;
mod ui;
mod messages;
mod timer;
mod ticker;
mod constants;

use std::io;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use constants::{APP_NAME, LOG_FILE, TICK_PERIOD, UI_POLL_INTERVAL};
use messages::{UiEvent, TickerCommand, TickerEvent, RenderState};
use messages::ui_events::key_to_ui_event;
use storage::Settings;
use timer::TimerActor;
use ticker::TickerActor;
use ui::{format_time, mode_color, render_mode_tabs, render_progress, status_label, toggle_hint};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let settings = Settings::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load settings, using defaults");
        Settings::default()
    });
    tracing::info!(durations = ?settings.durations, "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (ticker_cmd_tx, ticker_cmd_rx) = mpsc::unbounded_channel::<TickerCommand>();
    let (tick_tx, tick_rx) = mpsc::unbounded_channel::<TickerEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn ticker actor
    let ticker_actor = TickerActor::new(TICK_PERIOD, tick_tx);
    let ticker_handle = tokio::spawn(ticker_actor.run(ticker_cmd_rx));

    // Spawn timer actor
    let timer_actor = TimerActor::new(settings.durations, ticker_cmd_tx, render_tx);
    let timer_handle = tokio::spawn(timer_actor.run(ui_rx, tick_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    // Timer actor stops the ticker on its way out
    let _ = timer_handle.await;
    let _ = ticker_handle.await;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(UI_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let card = centered_rect(60, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title
            Constraint::Length(1),  // Mode switcher
            Constraint::Min(5),     // Clock
            Constraint::Length(3),  // Progress
            Constraint::Length(1),  // Tip
            Constraint::Length(1),  // Status bar
        ])
        .split(card);

    draw_title(f, state, chunks[0]);
    f.render_widget(render_mode_tabs(state.mode), chunks[1]);
    draw_clock(f, state, chunks[2]);
    f.render_widget(render_progress(state.mode, state.progress), chunks[3]);
    draw_tip(f, state, chunks[4]);
    draw_status_bar(f, state, chunks[5]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled("◷ ", Style::default().fg(mode_color(state.mode))),
        Span::styled(APP_NAME, Style::default().bold()),
    ])
    .centered();
    f.render_widget(Paragraph::new(title), area);
}

fn draw_clock(f: &mut Frame, state: &RenderState, area: Rect) {
    let color = mode_color(state.mode);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} · {} min ", state.mode.label(), state.total_seconds / 60))
        .title_alignment(Alignment::Center);

    let inner_height = area.height.saturating_sub(2);
    let pad = inner_height.saturating_sub(2) / 2;

    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(
        Line::from(Span::styled(
            format_time(state.remaining_seconds),
            Style::default().fg(color).bold(),
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            status_label(state.phase, state.mode).to_uppercase(),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tip(f: &mut Frame, state: &RenderState, area: Rect) {
    let tip = Paragraph::new(Line::from(state.mode.tip()).centered())
        .style(Style::default().fg(Color::Gray));
    f.render_widget(tip, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = format!(
        "{}| r:reset | 1-3/Tab:mode | ?:help | q:quit ",
        toggle_hint(state.is_running)
    );

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 FOCUS FLOW - Keyboard Shortcuts

 MODES
   1 / 2 / 3          Pomodoro / Short Break / Long Break
   Tab / Shift+Tab    Next / previous mode
   l / h, → / ←       Next / previous mode

 TIMER
   Space / Enter / s  Start or pause
   r                  Reset to full duration

 Switching mode always stops the timer and
 restores the new mode's full duration.

 GENERAL
   ?                  Toggle this help
   q / Esc / Ctrl+C   Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
