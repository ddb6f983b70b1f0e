use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::Outcome;
use crate::state::{AlertState, ButtonFocus, ConfirmState, PromptState, SelectState};

fn is_window_close(key: &KeyEvent) -> bool {
    // Ctrl+C stands in for closing the window via the OS chrome.
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

pub(crate) fn handle_prompt_key(state: &mut PromptState, key: KeyEvent) -> Option<Outcome<String>> {
    if is_window_close(&key) {
        return Some(Outcome::Cancelled);
    }
    match key.code {
        KeyCode::Enter => {
            return Some(Outcome::Value(state.input.current().trim().to_string()));
        }
        KeyCode::Esc => return Some(Outcome::Cancelled),
        KeyCode::Backspace => state.input.backspace(),
        KeyCode::Delete => state.input.delete(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.delete_word_back();
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.input.kill_to_end();
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                state.input.insert_char(ch);
            }
        }
        _ => {}
    }
    None
}

pub(crate) fn handle_confirm_key(state: &mut ConfirmState, key: KeyEvent) -> Option<Outcome<bool>> {
    if is_window_close(&key) {
        return Some(Outcome::Cancelled);
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(Outcome::Value(true)),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Outcome::Value(false)),
        KeyCode::Esc => Some(Outcome::Cancelled),
        KeyCode::Enter => match state.focused {
            ButtonFocus::Confirm => Some(Outcome::Value(true)),
            ButtonFocus::Cancel => Some(Outcome::Cancelled),
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            state.focused = state.focused.toggled();
            None
        }
        _ => None,
    }
}

/// Confirmation closes the dialog with whatever is selected, empty included;
/// the caller decides whether an empty selection is acceptable.
pub(crate) fn handle_select_key(state: &mut SelectState, key: KeyEvent) -> Option<Outcome<()>> {
    if is_window_close(&key) {
        return Some(Outcome::Cancelled);
    }
    match key.code {
        KeyCode::Up => state.move_up(),
        KeyCode::Down => state.move_down(),
        KeyCode::Char(' ') => state.toggle_focused(),
        KeyCode::Enter => return Some(Outcome::Value(())),
        KeyCode::Esc => return Some(Outcome::Cancelled),
        _ => {}
    }
    None
}

/// Alerts have no cancellation path distinct from acknowledgment.
pub(crate) fn handle_alert_key(_state: &mut AlertState, key: KeyEvent) -> Option<Outcome<()>> {
    if is_window_close(&key) {
        return Some(Outcome::Value(()));
    }
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Outcome::Value(())),
        _ => None,
    }
}
