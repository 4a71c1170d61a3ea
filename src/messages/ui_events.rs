//! UI events - messages from UI layer to Timer layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Mode;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Mode switcher
    SelectMode(Mode),
    NextMode,
    PrevMode,

    // Countdown controls
    ToggleRunning,
    Reset,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key dismisses the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => Some(UiEvent::SelectMode(Mode::Focus)),
        KeyCode::Char('2') => Some(UiEvent::SelectMode(Mode::ShortBreak)),
        KeyCode::Char('3') => Some(UiEvent::SelectMode(Mode::LongBreak)),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::NextMode),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::PrevMode),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => Some(UiEvent::ToggleRunning),
        KeyCode::Char('r') => Some(UiEvent::Reset),
        _ => None,
    }
}
