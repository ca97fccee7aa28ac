use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmAction};
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, wrap_text};

/// Render the y/n confirmation for a destructive action
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(action) = app.confirm.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.surface;
    let popup_w: u16 = 48.min(area.width);
    let inner_w = popup_w.saturating_sub(2) as usize;

    let ConfirmAction::DeleteTask { title, .. } = action;
    let mut lines = vec![Line::from("")];
    for s in wrap_text(" ", &format!("Delete \"{}\"?", title), inner_w) {
        lines.push(Line::from(Span::styled(
            s,
            Style::default().fg(theme.text_bright).bg(bg),
        )));
    }
    lines.push(Line::from(Span::styled(
        " This can't be undone.",
        Style::default().fg(theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            " y",
            Style::default()
                .fg(theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" delete   ", Style::default().fg(theme.text).bg(bg)),
        Span::styled(
            "n",
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" keep it", Style::default().fg(theme.text).bg(bg)),
    ]));

    let popup = centered_rect_fixed(popup_w, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            " Delete task ",
            Style::default().fg(theme.red).bg(bg).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.red).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Render the success popup with confetti scattered around the message
pub fn render_celebration(frame: &mut Frame, app: &App, area: Rect) {
    let Some(celebration) = app.celebration.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.surface;
    let popup = centered_rect_fixed(50, 11, area);
    let inner_w = popup.width.saturating_sub(2) as usize;
    frame.render_widget(Clear, popup);

    let centered = |text: &str, style: Style| {
        let text = unicode::truncate_to_width(text, inner_w);
        let pad = inner_w.saturating_sub(unicode::display_width(&text)) / 2;
        Line::from(vec![
            Span::styled(" ".repeat(pad), Style::default().bg(bg)),
            Span::styled(text, style),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        centered(
            "\u{1F389} Task Complete! \u{1F389}",
            Style::default()
                .fg(theme.gold)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        centered(
            &celebration.task_title,
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        centered(celebration.message, Style::default().fg(theme.highlight).bg(bg)),
        Line::from(""),
        centered("Enter to keep going", Style::default().fg(theme.dim).bg(bg)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.gold).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    // Confetti goes on the blank rows only, so it never covers the text
    let blank_rows = [0u16, 1, 3, 6];
    let buf = frame.buffer_mut();
    for piece in &celebration.confetti {
        if inner.width < 2 || inner.height == 0 {
            break;
        }
        let row = blank_rows[piece.y as usize * blank_rows.len() / 100];
        if row >= inner.height {
            continue;
        }
        let x = inner.x + piece.x * (inner.width - 2) / 100;
        buf.set_string(
            x,
            inner.y + row,
            piece.glyph,
            Style::default().bg(bg),
        );
    }
}
