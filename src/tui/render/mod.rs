pub mod calendar_view;
pub mod form_popup;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod hype_meter;
pub mod list_view;
pub mod popups;
pub mod status_row;
pub mod tab_bar;
pub mod toasts;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode, View};

/// Draw the whole screen for the current mode and view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2) | hype meter (3) | tab bar (2) | content | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting + quote
            Constraint::Length(3), // progress
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    hype_meter::render_hype_meter(frame, app, chunks[1]);
    tab_bar::render_tab_bar(frame, app, chunks[2]);

    match app.view {
        View::List => list_view::render_list_view(frame, app, chunks[3]),
        View::Calendar => calendar_view::render_calendar_view(frame, app, chunks[3]),
    }

    status_row::render_status_row(frame, app, chunks[4]);

    // Toasts sit above the content but below modal popups
    toasts::render_toasts(frame, app, area);

    match app.mode {
        Mode::AddTask => form_popup::render_form_popup(frame, app, area),
        Mode::Confirm => popups::render_confirm_popup(frame, app, area),
        Mode::Celebrate => popups::render_celebration(frame, app, area),
        Mode::Navigate => {}
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;

    #[test]
    fn full_screen_shows_every_region() {
        let mut app = sample_app();
        let out = render_app(&mut app);
        assert!(out.contains("Good morning"), "{out}");
        assert!(out.contains("READY TO CONQUER"), "{out}");
        assert!(out.contains("List"), "{out}");
        assert!(out.contains("Calendar"), "{out}");
        assert!(out.contains("Submit essay"), "{out}");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = sample_app();
        let _ = render_to_string(20, 6, |frame, _| super::render(frame, &mut app));
        app.view = crate::tui::app::View::Calendar;
        let _ = render_to_string(20, 6, |frame, _| super::render(frame, &mut app));
        app.open_add_form();
        let _ = render_to_string(20, 6, |frame, _| super::render(frame, &mut app));
    }
}
