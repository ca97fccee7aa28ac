use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::spans_width;

/// Title, greeting and today's date on the first row, the quote under it
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut top = vec![
        Span::styled(
            " Rally ",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\u{2502} ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.greeting(),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    let date = format!("{} ", app.today().format("%A, %-d %B"));
    let used = spans_width(&top);
    let date_w = unicode::display_width(&date);
    if used + date_w < width {
        top.push(Span::styled(
            " ".repeat(width - used - date_w),
            Style::default().bg(bg),
        ));
        top.push(Span::styled(date, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let quote = unicode::truncate_to_width(&format!(" {}", app.quote), width);
    let lines = vec![
        Line::from(top),
        Line::from(Span::styled(
            quote,
            Style::default()
                .fg(app.theme.text)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_greeting_date_and_quote() {
        let app = empty_app();
        let out = render_to_string(TERM_W, 2, |frame, area| render_header(frame, &app, area));
        assert!(out.contains("Rally"), "{out}");
        assert!(out.contains("Good morning, smartypants"), "{out}");
        assert!(out.contains("Wednesday, 14 May"), "{out}");
        assert!(out.contains("I believe in you"), "{out}");
    }
}
