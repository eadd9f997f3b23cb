use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use chronowheel::app::{AppState, GLYPHS};

const COLUMNS: usize = 8;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(picker) = &app.glyph_picker else {
        return;
    };

    let area = f.size();
    let picker_width = 36;
    let picker_height = (GLYPHS.len() / COLUMNS + 4) as u16;
    let x = (area.width.saturating_sub(picker_width)) / 2;
    let y = (area.height.saturating_sub(picker_height)) / 2;

    let picker_area = ratatui::layout::Rect {
        x,
        y,
        width: picker_width,
        height: picker_height,
    };

    f.render_widget(Clear, picker_area);

    let mut lines = Vec::new();
    for (row_index, row) in GLYPHS.chunks(COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col_index, glyph) in row.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            let style = if index == picker.selected {
                Style::default()
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", glyph), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(Color::Cyan)),
        Span::raw(" = Move | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Pick | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ]));

    let picker_paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pick a Glyph ")
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Center);

    f.render_widget(picker_paragraph, picker_area);
}
