use crate::ui::tui_state::UiState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    Redraw,
}

/// Applies one terminal event to the state.
pub fn handle_event(
    state: &mut UiState<'_>,
    evt: Event,
) -> Option<UiMsg> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = match evt {
        Event::Key(key) => key,
        Event::Resize(..) => return Some(UiMsg::Redraw),
        _ => return None,
    };
    if kind == KeyEventKind::Release {
        return None;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiMsg::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(UiMsg::Quit),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown | KeyCode::Char(' ') => {
            state.next();
            Some(UiMsg::Redraw)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            state.prev();
            Some(UiMsg::Redraw)
        }
        KeyCode::Home => {
            state.first();
            Some(UiMsg::Redraw)
        }
        KeyCode::End => {
            state.last();
            Some(UiMsg::Redraw)
        }
        _ => None,
    }
}
