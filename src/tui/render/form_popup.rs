use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Category;
use crate::tui::app::App;
use crate::tui::form::{AddTaskForm, FormField};
use crate::tui::text_input::TextInput;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

const POPUP_W: u16 = 60;

/// The add-task form: one labelled row per field, errors and hints below
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.surface;
    let inner_w = POPUP_W.min(area.width).saturating_sub(2) as usize;
    let label_w = 18;
    let value_w = inner_w.saturating_sub(label_w + 1);

    let label_style = |field: FormField| {
        if form.field == field {
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(bg)
        }
    };
    let value_style = Style::default().fg(theme.text_bright).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);

    let mut lines: Vec<Line> = vec![Line::from("")];
    // Row index (inside the block) and column of each text field, for the cursor
    let mut cursor_at: Option<(u16, u16)> = None;

    for field in [
        FormField::Title,
        FormField::Category,
        FormField::Due,
        FormField::Description,
        FormField::Tags,
    ] {
        let mut spans = vec![Span::styled(
            unicode::fit_to_width(&format!(" {}", field.label()), label_w),
            label_style(field),
        )];
        match field {
            FormField::Category => {
                spans.push(Span::styled(
                    category_picker(form.category),
                    value_style.fg(theme.category_color(form.category)),
                ));
            }
            FormField::Tags => {
                let chips: String = form.tags.iter().map(|t| format!("#{} ", t)).collect();
                let chips_w = unicode::display_width(&chips);
                spans.push(Span::styled(chips, value_style.fg(theme.category_color(form.category))));
                let input = &form.tag_input;
                if form.field == field {
                    cursor_at = Some((
                        lines.len() as u16,
                        (label_w + chips_w + input.cursor_col()) as u16,
                    ));
                }
                spans.push(Span::styled(
                    unicode::truncate_to_width(input.value(), value_w.saturating_sub(chips_w)),
                    value_style,
                ));
            }
            _ => {
                let input = field_input(form, field);
                if form.field == field {
                    cursor_at = Some((lines.len() as u16, (label_w + input.cursor_col()) as u16));
                }
                spans.push(Span::styled(
                    unicode::truncate_to_width(input.value(), value_w),
                    value_style,
                ));
            }
        }
        lines.push(Line::from(spans));

        if field == FormField::Due {
            lines.push(Line::from(Span::styled(
                format!("{}YYYY-MM-DD [HH:MM], today, tomorrow, +N", " ".repeat(label_w)),
                dim,
            )));
        }
    }

    lines.push(Line::from(""));
    if let Some(err) = &form.error {
        lines.push(Line::from(Span::styled(
            format!(" \u{26A0} {}", err),
            Style::default()
                .fg(theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )));
    } else if !form.can_submit(app.today()) {
        lines.push(Line::from(Span::styled(
            " Needs a title and a valid due date",
            dim,
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Ready! Press Enter to add it \u{1F4AA}",
            Style::default().fg(theme.green).bg(bg),
        )));
    }
    lines.push(Line::from(Span::styled(
        " Tab next field \u{00B7} Enter save \u{00B7} Esc cancel",
        dim,
    )));

    let popup_h = lines.len() as u16 + 2;
    let popup = centered_rect_fixed(POPUP_W, popup_h, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " \u{2728} New Task ",
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    if let Some((row, col)) = cursor_at {
        let x = popup.x + 1 + col;
        let y = popup.y + 1 + row;
        if x < popup.x + popup.width.saturating_sub(1) && y < popup.y + popup.height.saturating_sub(1)
        {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn field_input(form: &AddTaskForm, field: FormField) -> &TextInput {
    match field {
        FormField::Due => &form.due,
        FormField::Description => &form.description,
        FormField::Tags => &form.tag_input,
        FormField::Title | FormField::Category => &form.title,
    }
}

fn category_picker(category: Category) -> String {
    format!("\u{25C0} {} {} \u{25B6}", category.emoji(), category.label())
}
