use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

use super::helpers::spans_width;

/// Render the tab bar: one tab per view, with separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Split into tab row and separator row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let pending = app.pending_task_ids().len();
    let tabs = [
        (View::List, format!(" 1 List ({}) ", pending)),
        (View::Calendar, " 2 Calendar ".to_string()),
    ];

    let mut spans: Vec<Span> = vec![Span::styled(" ", bg_style)];
    let mut sep_cols: Vec<usize> = Vec::new();
    for (view, label) in tabs {
        spans.push(Span::styled(label, tab_style(app, app.view == view)));
        sep_cols.push(spans_width(&spans));
        spans.push(sep.clone());
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
    sep_cols
}

/// Horizontal rule under the tabs, joined to each tab separator
fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let line: String = (0..width)
        .map(|col| {
            if sep_cols.contains(&col) {
                '\u{2534}'
            } else {
                '\u{2500}'
            }
        })
        .collect();
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(line, style))), area);
}

fn tab_style(app: &App, active: bool) -> Style {
    if active {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
