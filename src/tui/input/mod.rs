mod confirm;
mod form;
mod navigate;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use confirm::{handle_celebrate, handle_confirm};
use form::handle_form;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key, now),
        Mode::AddTask => handle_form(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Celebrate => handle_celebrate(app, key),
    }
}

/// Handle a bracketed paste event. Only the add-task form takes text;
/// newlines become spaces.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::AddTask || text.is_empty() {
        return;
    }
    if let Some(form) = app.form.as_mut()
        && let Some(input) = form.focused_input()
    {
        let clean = text.replace(['\r', '\n'], " ");
        input.insert_str(&clean);
        form.error = None;
    }
}

/// Shifted letters arrive as `Char('J')` on some terminals and as
/// `Char('j')` + SHIFT on others; fold both into the uppercase form.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
