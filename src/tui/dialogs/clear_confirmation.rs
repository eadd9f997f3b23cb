use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use chronowheel::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    if !app.clear_month_pending {
        return;
    }

    let count = app.displayed_events().len();
    let month_label = app.month.format("%B %Y").to_string();

    let area = f.size();
    let dialog_width = 60;
    let dialog_height = 10;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(vec![Span::styled(
            "Clear Month?",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Remove all "),
            Span::styled(
                format!("{} event{}", count, if count == 1 { "" } else { "s" }),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" logged in "),
            Span::styled(month_label, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("?"),
        ]),
        Line::from(""),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(Color::Green)),
            Span::raw(" = Yes, clear | "),
            Span::styled("N", Style::default().fg(Color::Red)),
            Span::raw(" = No, cancel"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm Clear ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
