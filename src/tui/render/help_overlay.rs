use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect_fixed;

const GENERAL: &[(&str, &str)] = &[
    ("1 / 2 / v", "List / calendar / switch view"),
    ("a", "Add a task"),
    ("d", "Delete the selected task"),
    ("n", "Toggle dark mode"),
    ("b", "Enable desktop reminders"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

const LIST: &[(&str, &str)] = &[
    ("\u{2191}\u{2193} / jk", "Move cursor"),
    ("g / G", "First / last task"),
    ("s", "Start task"),
    ("x / Space", "Mark complete"),
    ("Enter", "Next step (start, then complete)"),
];

const CALENDAR: &[(&str, &str)] = &[
    ("\u{2190}\u{2192} / hl", "Previous / next day"),
    ("\u{2191}\u{2193} / kj", "Previous / next week"),
    ("[ / ]", "Previous / next month"),
    ("t", "Jump to today"),
    ("J / K", "Pick a task on the day"),
    ("Enter", "Start or complete it"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for (title, bindings) in [("General", GENERAL), ("List", LIST), ("Calendar", CALENDAR)] {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(format!(" {}", title), header_style)));
        for (key, desc) in bindings {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
    }

    let overlay_area = centered_rect_fixed(56, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(Span::styled(" Key Bindings ", header_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:<14}", key), key_style),
        Span::styled(desc, desc_style),
    ]));
}
