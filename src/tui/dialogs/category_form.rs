use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use chronowheel::{
    app::{AppState, CategoryField},
    ui::theme::parse_hex_color,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.category_form else {
        return;
    };

    let area = f.size();
    let form_width = 56;
    let form_height = 12;
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
    let field_color = |field: CategoryField| {
        if form.active_field == field {
            active_color
        } else {
            inactive_color
        }
    };

    let swatch = parse_hex_color(&form.color_buffer)
        .map(|color| Span::styled(" ●", Style::default().fg(color)))
        .unwrap_or_else(|| Span::styled(" (invalid)", Style::default().fg(app.theme.error)));

    let form_text = vec![
        Line::from(vec![Span::styled(
            "New Category",
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", Style::default().fg(field_color(CategoryField::Name))),
            Span::raw(&form.name),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Icon: ", Style::default().fg(field_color(CategoryField::Icon))),
            Span::raw(if form.icon.is_empty() { "❖" } else { form.icon.as_str() }),
            Span::styled(
                if form.active_field == CategoryField::Icon {
                    " [Space = pick]"
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Color: ",
                Style::default().fg(field_color(CategoryField::Color)),
            ),
            Span::raw(&form.color_buffer),
            swatch,
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
                .title(" New Category ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
