use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use chronowheel::{app::AppState, ui::theme::parse_hex_color};

/// Color legend: one row per category with its glyph, name, and how
/// many of the displayed month's events it accounts for.
pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let displayed = app.displayed_events();

    let mut lines = Vec::new();
    for category in &app.categories {
        let count = displayed
            .iter()
            .filter(|e| e.category_id == category.id)
            .count();

        let swatch_color = parse_hex_color(&category.color).unwrap_or(app.theme.dot_marker);

        let count_text = if count > 0 {
            format!(" ({count})")
        } else {
            String::new()
        };

        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(swatch_color)),
            Span::raw(format!("{} {}", category.icon, category.name)),
            Span::styled(count_text, Style::default().fg(app.theme.inactive_day)),
        ]));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Legend "),
    );
    f.render_widget(content, area);
}
