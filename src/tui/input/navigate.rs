use std::time::Instant;

use chrono::{Duration, Months};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Instant) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    app.status_message = None;

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,
        (_, KeyCode::Char('1')) => app.view = View::List,
        (_, KeyCode::Char('2')) => app.view = View::Calendar,
        (_, KeyCode::Char('v')) | (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            app.view = match app.view {
                View::List => View::Calendar,
                View::Calendar => View::List,
            };
        }
        (_, KeyCode::Char('a')) => app.open_add_form(),
        (_, KeyCode::Char('n')) => app.toggle_dark_mode(),
        (_, KeyCode::Char('b')) => app.enable_reminders(),
        _ => match app.view {
            View::List => handle_list_key(app, key, now),
            View::Calendar => handle_calendar_key(app, key),
        },
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, now: Instant) {
    let count = app.pending_task_ids().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.list_cursor + 1 < count {
                app.list_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.list_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.list_cursor = count.saturating_sub(1),
        KeyCode::Char('s') => {
            if let Some(id) = app.selected_task_id() {
                app.start_task(id);
            }
        }
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task_id() {
                app.request_complete(id, now);
            }
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_task_id() {
                app.advance_task(id, now);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                app.ask_delete(id);
            }
        }
        _ => {}
    }
}

fn handle_calendar_key(app: &mut App, key: KeyEvent) {
    let selected = app.calendar.selected;
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => shift_days(app, -1),
        KeyCode::Char('l') | KeyCode::Right => shift_days(app, 1),
        KeyCode::Char('k') | KeyCode::Up => shift_days(app, -7),
        KeyCode::Char('j') | KeyCode::Down => shift_days(app, 7),
        KeyCode::Char('[') => {
            if let Some(date) = selected.checked_sub_months(Months::new(1)) {
                app.calendar.select(date);
            }
        }
        KeyCode::Char(']') => {
            if let Some(date) = selected.checked_add_months(Months::new(1)) {
                app.calendar.select(date);
            }
        }
        KeyCode::Char('t') => {
            let today = app.today();
            app.calendar.select(today);
        }
        KeyCode::Char('J') => {
            let count = app.selected_day_tasks().len();
            if app.calendar.task_cursor + 1 < count {
                app.calendar.task_cursor += 1;
            }
        }
        KeyCode::Char('K') => {
            app.calendar.task_cursor = app.calendar.task_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task_id() {
                app.advance_calendar_task(id);
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id() {
                app.ask_delete(id);
            }
        }
        _ => {}
    }
}

fn shift_days(app: &mut App, days: i64) {
    if let Some(date) = app
        .calendar
        .selected
        .checked_add_signed(Duration::days(days))
    {
        app.calendar.select(date);
    }
}
