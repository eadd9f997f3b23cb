use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use chronowheel::app::{AppState, FormField};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 64;
    let form_height = 16;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let field_color = |field: FormField| {
        if form.active_field == field {
            active_color
        } else {
            inactive_color
        }
    };

    let category_label = app
        .categories
        .get(form.category_index)
        .map(|c| format!("{} {}", c.icon, c.name))
        .unwrap_or_else(|| "(none)".to_string());

    let form_text = vec![
        Line::from(vec![Span::styled(
            "Log Event",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(field_color(FormField::Date))),
            Span::raw(&form.date_buffer),
            Span::styled(
                if form.active_field == FormField::Date && !form.date_touched {
                    " [type to replace]"
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(field_color(FormField::Time))),
            Span::raw(&form.time_buffer),
            Span::styled(
                if form.active_field == FormField::Time {
                    if form.time_touched {
                        " (HH:MM or HHMM)"
                    } else {
                        " [type to replace]"
                    }
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Category: ",
                Style::default().fg(field_color(FormField::Category)),
            ),
            Span::raw(format!("◀ {} ▶", category_label)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Icon: ", Style::default().fg(field_color(FormField::Icon))),
            Span::raw(if form.icon.is_empty() {
                "(category default)"
            } else {
                form.icon.as_str()
            }),
            Span::styled(
                if form.active_field == FormField::Icon {
                    " [Space = pick]"
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Note: ", Style::default().fg(field_color(FormField::Note))),
            Span::raw(&form.note),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" = Next field | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" New Event ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
