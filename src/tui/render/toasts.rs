use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::wrap_text;

const TOAST_W: u16 = 40;

/// Stack live toasts in the top-right corner, newest at the bottom
pub fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.surface;
    let width = TOAST_W.min(area.width);
    if width < 4 {
        return;
    }
    let inner_w = width.saturating_sub(2) as usize;
    let x = area.x + area.width - width;
    let mut y = area.y + 1;

    for toast in &app.toasts {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", toast.title),
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))];
        for s in wrap_text(" ", &toast.body, inner_w) {
            lines.push(Line::from(Span::styled(
                s,
                Style::default().fg(theme.text).bg(bg),
            )));
        }

        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, height);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.highlight).bg(bg))
            .style(Style::default().bg(bg));
        frame.render_widget(Paragraph::new(lines).block(block), rect);
        y += height;
    }
}
