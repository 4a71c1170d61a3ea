use ratatui::{prelude::*, widgets::*};

use crate::models::{Mode, Phase};

/// Renders the mode switcher tabs
pub fn render_mode_tabs<'a>(active: Mode) -> Tabs<'a> {
    let titles: Vec<Line> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| Line::from(format!(" {}:{} ", i + 1, m.label())))
        .collect();

    Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(mode_color(active)).bold())
        .divider("|")
}

/// Renders the remaining-time gauge, full at the start of a run
pub fn render_progress<'a>(mode: Mode, progress: f64) -> Gauge<'a> {
    let ratio = progress.clamp(0.0, 1.0);
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Remaining "))
        .gauge_style(Style::default().fg(mode_color(mode)))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0))
}

/// Format seconds as MM:SS
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Mode color
pub fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::Red,
        Mode::ShortBreak => Color::Cyan,
        Mode::LongBreak => Color::Blue,
    }
}

/// Status line under the clock
pub fn status_label(phase: Phase, mode: Mode) -> &'static str {
    match phase {
        Phase::Idle => "Ready",
        Phase::Running if mode.is_break() => "On break",
        Phase::Running => "Focusing",
        Phase::Paused => "Paused",
        Phase::Completed => "Done",
    }
}

/// Primary control hint, follows the run state
pub fn toggle_hint(is_running: bool) -> &'static str {
    if is_running {
        " Space:pause "
    } else {
        " Space:start "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(1400), "23:20");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(0), "00:00");
        // Long custom durations keep counting minutes
        assert_eq!(format_time(120 * 60 + 5), "120:05");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(Phase::Running, Mode::Focus), "Focusing");
        assert_eq!(status_label(Phase::Running, Mode::LongBreak), "On break");
        assert_eq!(status_label(Phase::Completed, Mode::Focus), "Done");
    }
}
