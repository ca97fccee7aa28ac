use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::progress::Progress;
use crate::tui::app::App;

use super::helpers::spans_width;

const FILLED: &str = "\u{2588}";
const EMPTY: &str = "\u{2591}";

/// Tier badge and counts, the gauge, then the next-milestone line
pub fn render_hype_meter(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let progress = Progress::from_tasks(app.store.all());
    let tier_color = if progress.all_complete() {
        app.theme.gold
    } else {
        app.theme.highlight
    };

    // Row 1: badge left, counts right
    let mut badge = vec![Span::styled(
        format!(" {} {}", progress.tier.emoji(), progress.tier.label()),
        Style::default()
            .fg(tier_color)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let counts = if progress.all_complete() {
        "ALL COMPLETE! ".to_string()
    } else {
        format!("{} of {} done ", progress.done, progress.total)
    };
    let used = spans_width(&badge);
    let counts_w = counts.chars().count();
    if used + counts_w < width {
        badge.push(Span::styled(
            " ".repeat(width - used - counts_w),
            Style::default().bg(bg),
        ));
        badge.push(Span::styled(counts, Style::default().fg(app.theme.text).bg(bg)));
    }

    // Row 2: gauge with the percentage at the end
    let pct = format!(" {:>3}%", progress.percentage);
    let bar_w = width.saturating_sub(pct.len() + 2);
    let filled = bar_w * progress.percentage as usize / 100;
    let gauge = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(FILLED.repeat(filled), Style::default().fg(tier_color).bg(bg)),
        Span::styled(
            EMPTY.repeat(bar_w - filled),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(
            pct,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Row 3: encouragement and milestone
    let mut hint = format!(" {}", progress.tier.encouragement());
    if let Some(m) = progress.next_milestone {
        hint.push_str(&format!(
            "  Next milestone: {} tasks done for {}%",
            m.tasks, m.percent
        ));
    } else if progress.total == 0 {
        hint = " Add a task to get the hype going!".to_string();
    }

    let lines = vec![
        Line::from(badge),
        Line::from(gauge),
        Line::from(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg))),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
