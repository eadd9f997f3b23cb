use chrono::Datelike;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chronowheel::{app::AppState, model::resolve_display};

/// Textual log of the displayed month's events, in chart order.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.displayed_events();

    let title = format!("Log – {}", app.month.format("%B %Y"));

    let mut lines = vec![
        Line::from(vec![Span::styled(
            title,
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            "No events logged",
            Style::default().fg(Color::DarkGray),
        )]));
    } else {
        let selected_base = Style::default()
            .bg(app.theme.selected_bg)
            .add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let display = resolve_display(event, &app.categories);
            let is_selected = idx == app.selected_event_index;

            let when = format!(
                "{:>2} {}",
                event.datetime.day(),
                event.datetime.format("%H:%M")
            );

            let (when_style, text_style) = if is_selected {
                (selected_base.fg(Color::Black), selected_base.fg(Color::Black))
            } else {
                (
                    Style::default().fg(app.theme.success),
                    Style::default().fg(Color::White),
                )
            };

            let cursor = if is_selected { ">" } else { " " };

            let label = if display.category_name.is_empty() {
                display.icon.to_string()
            } else {
                format!("{} {}", display.icon, display.category_name)
            };

            let mut spans = vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(when, when_style),
                Span::raw(" "),
                Span::styled(label, text_style),
            ];

            if let Some(note) = &event.note {
                spans.push(Span::styled(
                    format!(" · {}", note),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" = Navigate | "),
            Span::styled("a", Style::default().fg(Color::Green)),
            Span::raw(" = Add | "),
            Span::styled("x", Style::default().fg(Color::Red)),
            Span::raw(" = Delete | "),
            Span::styled("X", Style::default().fg(Color::Red)),
            Span::raw(" = Clear month"),
        ]));
    }

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
