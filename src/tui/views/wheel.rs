use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use chronowheel::{
    app::AppState,
    model::resolve_display,
    ui::chart::{angle_for_hour, event_offset, is_major_hour},
    ui::month_view::{days_in_month, month_events},
    ui::theme::parse_hex_color,
};

/// Draws the radial chart: one ring per day of the displayed month, 24
/// hour spokes, hour labels outside the outer ring, and a glyph per
/// event. Chart angles assume screen coordinates (y down); the canvas y
/// axis points up, so every y is negated on the way in.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let geometry = app.chart;
    let half = geometry.size / 2.0;
    let ring_count = days_in_month(app.month);
    let ring_step = geometry.ring_step(ring_count);

    // Canvas units per terminal cell, for nudging printed text.
    let units_per_cell = geometry.size / area.width.max(1) as f64;

    let events = month_events(&app.events, app.month);
    let selected_id = app.selected_event().map(|e| e.id.clone());

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .x_bounds([-half, half])
        .y_bounds([-half, half])
        .paint(|ctx| {
            for day in 1..=ring_count {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: geometry.inner_radius + day as f64 * ring_step,
                    color: app.theme.ring,
                });
            }

            for hour in 0..24 {
                let angle = angle_for_hour(hour);
                let (dx, dy) = (angle.cos(), -angle.sin());
                let color = if is_major_hour(hour) {
                    app.theme.spoke_major
                } else {
                    app.theme.spoke
                };
                ctx.draw(&CanvasLine {
                    x1: geometry.inner_radius * dx,
                    y1: geometry.inner_radius * dy,
                    x2: geometry.outer_radius * dx,
                    y2: geometry.outer_radius * dy,
                    color,
                });
            }

            ctx.layer();

            for hour in (0..24).step_by(2) {
                let angle = angle_for_hour(hour);
                let label = hour.to_string();
                let x = geometry.label_radius() * angle.cos()
                    - label.len() as f64 * units_per_cell / 2.0;
                let y = geometry.label_radius() * -angle.sin();
                ctx.print(
                    x,
                    y,
                    Line::styled(label, Style::default().fg(app.theme.hour_label)),
                );
            }

            for event in &events {
                let display = resolve_display(event, &app.categories);
                let (ox, oy) = event_offset(event.datetime, &geometry, ring_count);
                let color = display
                    .color
                    .and_then(parse_hex_color)
                    .unwrap_or(app.theme.dot_marker);

                let style = if selected_id.as_deref() == Some(event.id.as_str()) {
                    Style::default().fg(Color::Black).bg(color)
                } else {
                    Style::default().fg(color)
                };

                ctx.print(ox, -oy, Line::styled(display.icon.to_string(), style));
            }

            let center_label = app.month.format("%b").to_string();
            ctx.print(
                -(center_label.len() as f64) * units_per_cell / 2.0,
                0.0,
                Line::styled(
                    center_label,
                    Style::default().fg(app.theme.title),
                ),
            );
        });

    f.render_widget(canvas, area);
}
