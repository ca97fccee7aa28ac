use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::notifier::Permission;
use crate::tui::app::{App, Mode, View};
use crate::util::unicode;

use super::helpers::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let bell = match app.notification_permission() {
        Permission::Granted => "\u{1F514}",
        _ => "\u{1F515}",
    };
    let mut spans = vec![Span::styled(
        format!(" {} ", bell),
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    if app.config.ui.show_key_hints {
        let hint = key_hints(app);
        let used = spans_width(&spans);
        let hint_w = unicode::display_width(hint);
        if used + hint_w < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_w),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    match (app.mode, app.view) {
        (Mode::AddTask, _) => "Tab next  Enter save  Esc cancel ",
        (Mode::Confirm, _) => "y delete  n keep ",
        (Mode::Celebrate, _) => "Enter continue ",
        (Mode::Navigate, View::List) => "a add  s start  x done  d delete  v calendar  ? help ",
        (Mode::Navigate, View::Calendar) => "hjkl day  [ ] month  t today  Enter advance  ? help ",
    }
}
