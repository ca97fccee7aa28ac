use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::form::FormField;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_add_form();
            return;
        }
        KeyCode::Enter => {
            // Enter in the tag field adds the tag; anywhere else it submits
            let committed = app
                .form
                .as_mut()
                .filter(|f| f.field == FormField::Tags && !f.tag_input.is_blank())
                .map(|f| f.commit_tag())
                .is_some();
            if !committed {
                app.submit_add_form();
            }
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    form.error = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::Down) => form.field = form.field.next(),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => form.field = form.field.prev(),
        _ if form.field == FormField::Category => match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.category = form.category.cycle(false),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
                form.category = form.category.cycle(true)
            }
            _ => {}
        },
        (_, KeyCode::Backspace) if form.field == FormField::Tags && form.tag_input.value().is_empty() => {
            form.remove_last_tag();
        }
        (modifiers, code) => {
            let Some(input) = form.focused_input() else {
                return;
            };
            match (modifiers, code) {
                (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.clear(),
                (KeyModifiers::CONTROL, KeyCode::Char('a')) => input.home(),
                (KeyModifiers::CONTROL, KeyCode::Char('e')) => input.end(),
                (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => input.insert(c),
                (_, KeyCode::Backspace) => {
                    input.backspace();
                }
                (_, KeyCode::Delete) => input.delete(),
                (_, KeyCode::Left) => input.left(),
                (_, KeyCode::Right) => input.right(),
                (_, KeyCode::Home) => input.home(),
                (_, KeyCode::End) => input.end(),
                _ => {}
            }
        }
    }
}
