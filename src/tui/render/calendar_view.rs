use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ops::calendar::{self, CalendarCell, CalendarStats, DAY_NAMES, DayBucket};
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::status_symbol;

/// Tasks shown inside one day cell before collapsing into "+N more"
const TASKS_PER_CELL: usize = 2;
/// Width of the selected-day panel
const PANEL_W: u16 = 30;
/// Below this width the panel is dropped
const PANEL_MIN_TOTAL_W: u16 = 70;
/// Below this height the stats footer is dropped
const STATS_MIN_H: u16 = 6;

/// Month grid on the left, selected day's tasks on the right
pub fn render_calendar_view(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    if app.store.is_empty() {
        render_empty(frame, app, area);
        return;
    }

    let (area, stats_area) = if area.height >= STATS_MIN_H {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let (grid_area, panel_area) = if area.width >= PANEL_MIN_TOTAL_W {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(PANEL_W)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    render_grid(frame, app, grid_area);
    if let Some(panel) = panel_area {
        render_day_panel(frame, app, panel);
    }
    if let Some(stats) = stats_area {
        render_stats(frame, app, stats);
    }
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Your calendar awaits! \u{1F4C5}",
            style.fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Add a task with a due date (press a) to see it here.",
            style,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// One-line footer: pending, completed and overdue counts
fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let stats = CalendarStats::from_tasks(app.store.all(), app.now());
    let count = |n: usize, color: Color| {
        Span::styled(
            n.to_string(),
            Style::default().fg(color).bg(bg).add_modifier(Modifier::BOLD),
        )
    };
    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.dim).bg(bg));
    let spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        count(stats.pending, theme.highlight),
        label(" Pending Tasks  \u{00B7}  "),
        count(stats.completed, theme.green),
        label(" Completed  \u{00B7}  "),
        count(stats.overdue, theme.yellow),
        label(" Overdue"),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let month = calendar::month_grid(app.store.all(), app.calendar.month, app.today());
    let cell_w = area.width / 7;

    // Month header
    let title = format!("\u{25C0} {} {} \u{25B6}", month.month.name(), month.month.year());
    let title_w = unicode::display_width(&title);
    let pad = (area.width as usize).saturating_sub(title_w) / 2;
    let header = Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(bg)),
        Span::styled(
            title,
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), Rect { height: 1, ..area });
    if area.height < 2 || area.width < 7 {
        return;
    }

    // Weekday names
    let names: Vec<Span> = DAY_NAMES
        .iter()
        .map(|d| {
            Span::styled(
                unicode::fit_to_width(&format!(" {}", d), cell_w as usize),
                Style::default().fg(theme.dim).bg(bg).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(names)),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );

    let weeks: Vec<&[CalendarCell]> = month.weeks().collect();
    let rows_h = area.height.saturating_sub(2);
    let row_h = (rows_h / weeks.len().max(1) as u16).clamp(1, 2 + TASKS_PER_CELL as u16);

    for (w, week) in weeks.iter().enumerate() {
        let y = area.y + 2 + w as u16 * row_h;
        if y + row_h > area.y + area.height {
            break;
        }
        for (d, cell) in week.iter().enumerate() {
            let CalendarCell::Day(bucket) = cell else {
                continue;
            };
            let rect = Rect::new(area.x + d as u16 * cell_w, y, cell_w, row_h);
            render_day_cell(frame, app, bucket, rect);
        }
    }
}

fn render_day_cell(frame: &mut Frame, app: &App, bucket: &DayBucket, rect: Rect) {
    let theme = &app.theme;
    let width = rect.width as usize;
    let selected = bucket.date == app.calendar.selected;

    let cell_bg = if selected {
        theme.selection_bg
    } else if bucket.is_today {
        theme.today_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(cell_bg);
    let mut day_style = if bucket.is_past {
        base.fg(theme.dim)
    } else {
        base.fg(theme.text_bright)
    };
    if selected || bucket.is_today {
        day_style = day_style.add_modifier(Modifier::BOLD);
    }
    if bucket.is_today {
        day_style = day_style.fg(theme.highlight);
    }

    let mut first = vec![Span::styled(format!(" {:>2}", bucket.day()), day_style)];
    if bucket.overdue_indicator {
        first.push(Span::styled("!", base.fg(theme.red).add_modifier(Modifier::BOLD)));
    }
    // Single-row cells only have room for a count
    if rect.height == 1 && !bucket.tasks.is_empty() {
        first.push(Span::styled(
            format!(" \u{2022}{}", bucket.tasks.len()),
            base.fg(theme.highlight),
        ));
    }

    let mut lines = vec![Line::from(first)];
    let room = (rect.height as usize).saturating_sub(1);
    let cap = room.min(TASKS_PER_CELL);
    // Leave a row for "+N more" when the day overflows
    let shown = if bucket.tasks.len() <= cap {
        bucket.tasks.len()
    } else if room > cap {
        cap
    } else {
        cap.saturating_sub(1)
    };
    for task in bucket.tasks.iter().take(shown) {
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(&format!(" {}", task.title), width),
            base.fg(theme.category_color(task.category)),
        )));
    }
    let hidden = bucket.tasks.len() - shown;
    if hidden > 0 && lines.len() < rect.height as usize {
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(&format!(" +{} more", hidden), width),
            base.fg(theme.dim),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(base), rect);
}

fn render_day_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let inner_w = area.width.saturating_sub(2) as usize;

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!(" {}", app.calendar.selected.format("%A, %-d %B")),
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let tasks = app.selected_day_tasks();
    if tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " Nothing due. Enjoy it \u{1F338}",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }
    let cursor = app.calendar.task_cursor.min(tasks.len().saturating_sub(1));
    for (i, task) in tasks.iter().enumerate() {
        let selected = i == cursor;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let marker = if selected { "\u{25B8}" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.selection_border).bg(row_bg)),
            Span::styled(
                format!("{} ", status_symbol(task.status)),
                Style::default().fg(theme.status_color(task.status)).bg(row_bg),
            ),
            Span::styled(
                unicode::truncate_to_width(&task.title, inner_w.saturating_sub(5)),
                Style::default()
                    .fg(theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            unicode::truncate_to_width(
                &format!(
                    "     {} {} \u{00B7} {}",
                    task.category.emoji(),
                    task.category.label(),
                    task.status.label()
                ),
                inner_w,
            ),
            Style::default().fg(theme.category_color(task.category)).bg(bg),
        )));
        if selected {
            lines.push(Line::from(Span::styled(
                format!("     Enter: {}", task.status.next_action()),
                Style::default().fg(theme.dim).bg(bg),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
