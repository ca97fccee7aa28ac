use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Status, Task};
use crate::ops::grouping::pending_by_category;
use crate::ops::urgency;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{format_due, spans_width, status_symbol};

/// Pending tasks grouped by category, scrolled to keep the cursor visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if area.height == 0 || area.width == 0 {
        return;
    }

    let groups = pending_by_category(app.store.all());
    if groups.is_empty() {
        let msg = if app.store.is_empty() {
            " No tasks yet. Press a to add your first one \u{2728}"
        } else {
            " All caught up! Nothing pending \u{1F389}"
        };
        let line = Line::from(Span::styled(msg, Style::default().fg(app.theme.dim).bg(bg)));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    let width = area.width as usize;
    let now = app.now();
    let cursor = app.list_cursor;
    let mut lines: Vec<Line> = Vec::new();
    // First and last line of the selected task
    let mut selected_span = (0, 0);
    let mut index = 0;

    for (category, tasks) in &groups {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {}", category.emoji(), category.label()),
                Style::default()
                    .fg(app.theme.category_color(*category))
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", tasks.len()),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ]));

        for task in tasks {
            let selected = index == cursor;
            let start = lines.len();
            push_task_lines(&mut lines, app, task, selected, width, now);
            if selected {
                selected_span = (start, lines.len() - 1);
            }
            index += 1;
        }
    }

    // Scroll so the selected task is fully visible
    let height = area.height as usize;
    let (sel_start, sel_end) = selected_span;
    if sel_start < app.list_scroll {
        app.list_scroll = sel_start;
    } else if sel_end >= app.list_scroll + height {
        app.list_scroll = sel_end + 1 - height.min(sel_end + 1);
    }
    app.list_scroll = app.list_scroll.min(lines.len().saturating_sub(1));

    let visible: Vec<Line> = lines.into_iter().skip(app.list_scroll).take(height).collect();
    frame.render_widget(Paragraph::new(visible).style(Style::default().bg(bg)), area);
}

fn push_task_lines<'a>(
    lines: &mut Vec<Line<'a>>,
    app: &App,
    task: &Task,
    selected: bool,
    width: usize,
    now: chrono::NaiveDateTime,
) {
    let theme = &app.theme;
    let row_bg = if selected { theme.selection_bg } else { theme.background };
    let base = Style::default().bg(row_bg);

    let urgency = urgency::classify(task.due, now);
    let right = format!("{} {} ", urgency.marker(), urgency.label());
    let right_w = unicode::display_width(&right);

    let mut left = vec![
        Span::styled(
            if selected { " \u{25B8} " } else { "   " },
            base.fg(theme.selection_border),
        ),
        Span::styled(
            format!("{} ", status_symbol(task.status)),
            base.fg(theme.status_color(task.status)),
        ),
    ];
    let badge = if app.is_completing(task.id) {
        Some(("completing\u{2026}", theme.green))
    } else if task.status == Status::InProgress {
        Some((Status::InProgress.label(), theme.yellow))
    } else {
        None
    };
    let badge_w = badge.map_or(0, |(text, _)| unicode::display_width(text) + 3);
    let title_room = width.saturating_sub(spans_width(&left) + right_w + badge_w + 1);
    left.push(Span::styled(
        unicode::truncate_to_width(&task.title, title_room),
        base.fg(theme.text_bright).add_modifier(Modifier::BOLD),
    ));
    if let Some((text, color)) = badge {
        left.push(Span::styled(format!(" [{}]", text), base.fg(color)));
    }

    let used = spans_width(&left);
    if used + right_w <= width {
        left.push(Span::styled(" ".repeat(width - used - right_w), base));
        left.push(Span::styled(
            right,
            base.fg(theme.severity_color(urgency.severity())),
        ));
    }
    lines.push(Line::from(left));

    // Due date and tags
    let mut meta = vec![
        Span::styled("     ", base),
        Span::styled(format_due(task.due), base.fg(theme.dim)),
    ];
    for tag in &task.tags {
        meta.push(Span::styled(" ", base));
        meta.push(Span::styled(
            format!("#{}", tag),
            base.fg(theme.category_color(task.category)),
        ));
    }
    pad_to(&mut meta, width, base);
    lines.push(Line::from(meta));

    if let Some(desc) = &task.description {
        let mut row = vec![Span::styled(
            unicode::truncate_to_width(&format!("     {}", desc), width),
            base.fg(theme.text).add_modifier(Modifier::ITALIC),
        )];
        pad_to(&mut row, width, base);
        lines.push(Line::from(row));
    }
}

/// Fill the rest of the row so the selection background spans the width
fn pad_to(spans: &mut Vec<Span>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use std::time::Instant;

    fn render(app: &mut App, h: u16) -> String {
        render_to_string(TERM_W, h, |frame, area| render_list_view(frame, app, area))
    }

    #[test]
    fn empty_store_message() {
        let mut app = empty_app();
        assert!(render(&mut app, 5).contains("No tasks yet"));
    }

    #[test]
    fn all_done_message() {
        let mut app = sample_app();
        let ids: Vec<_> = app.store.all().iter().map(|t| t.id).collect();
        for id in ids {
            app.store.set_status(id, Status::Done);
        }
        assert!(render(&mut app, 5).contains("All caught up"));
    }

    #[test]
    fn groups_with_counts_and_urgency() {
        let mut app = sample_app();
        let out = render(&mut app, 20);
        assert!(out.contains("School (2)"), "{out}");
        assert!(out.contains("Rugby (1)"), "{out}");
        assert!(out.contains("Music Practice (1)"), "{out}");
        assert!(out.contains("Due today"), "{out}");
        assert!(out.contains("Due tomorrow"), "{out}");
        assert!(out.contains("Overdue!"), "{out}");
        assert!(out.contains("Due in 5 days"), "{out}");
        assert!(out.contains("Wed, 14 May 09:30"), "{out}");
        assert!(out.contains("#Essay"), "{out}");
        assert!(out.contains("2000 words"), "{out}");
        // School appears before Rugby (first appearance order)
        assert!(out.find("School").unwrap() < out.find("Rugby").unwrap());
    }

    #[test]
    fn cursor_marks_selected_task() {
        let mut app = sample_app();
        app.list_cursor = 1;
        let out = render(&mut app, 20);
        let line = out.lines().find(|l| l.contains('\u{25B8}')).unwrap();
        assert!(line.contains("Revise exam"), "{out}");
    }

    #[test]
    fn in_progress_and_completing_badges() {
        let mut app = sample_app();
        let ids = app.pending_task_ids();
        app.start_task(ids[0]);
        app.request_complete(ids[1], Instant::now());
        let out = render(&mut app, 20);
        assert!(out.contains("[In Progress]"), "{out}");
        assert!(out.contains("completing"), "{out}");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = sample_app();
        app.list_cursor = 3;
        let out = render(&mut app, 4);
        assert!(out.contains("Piano scales"), "{out}");
        assert!(app.list_scroll > 0);
        app.list_cursor = 0;
        let out = render(&mut app, 4);
        assert!(out.contains("Submit essay"), "{out}");
    }
}
