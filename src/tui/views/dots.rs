use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chronowheel::{app::AppState, ui::month_view::dot_layout};

/// Compact dot-calendar summary of the displayed month: days that have
/// events carry the dot-marker color and an underline.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let today = chrono::Local::now().date_naive();
    let layout = dot_layout(&app.events, app.month, today);

    let header_style = Style::default().fg(app.theme.weekday_header);
    let mut lines = vec![Line::from(
        ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
            .iter()
            .map(|d| Span::styled(format!(" {} ", d), header_style))
            .collect::<Vec<_>>(),
    )];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for cell in &week.days {
            let day_text = cell
                .date
                .map(|d| format!(" {:>2} ", d.day()))
                .unwrap_or_else(|| "    ".to_string());

            let mut style = Style::default();
            if !cell.is_current_month {
                style = style.fg(app.theme.inactive_day);
            } else if cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            if cell.has_events && cell.is_current_month {
                style = style
                    .fg(app.theme.dot_marker)
                    .add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Calendar "),
    );
    f.render_widget(content, area);
}
