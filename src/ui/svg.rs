use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use crate::model::{Category, EventItem, resolve_display};
use crate::ui::chart::{
    ChartGeometry, LabelAnchor, angle_for_hour, event_offset, hour_label_anchor, is_major_hour,
};
use crate::ui::month_view::{days_in_month, month_events};

const RING_STROKE: &str = "#e5e7eb";
const SPOKE_STROKE: &str = "#e5e7eb";
const SPOKE_MAJOR_STROKE: &str = "#9ca3af";
const LABEL_FILL: &str = "#374151";
const NEUTRAL_DOT_FILL: &str = "#9ca3af";
const DOT_RADIUS: f64 = 7.0;

/// Renders the displayed month's wheel as a standalone SVG document.
///
/// `width` passes through the same clamp as the interactive layout, so
/// an export and an on-screen chart of the same width agree exactly.
pub fn render_month_svg(
    categories: &[Category],
    events: &[EventItem],
    month: NaiveDate,
    width: u32,
) -> String {
    let geometry = ChartGeometry::for_width(width);
    let size = geometry.size;
    let center = size / 2.0;
    let ring_count = days_in_month(month);
    let ring_step = geometry.ring_step(ring_count);

    let mut body = String::new();

    for day in 1..=ring_count {
        let radius = geometry.inner_radius + day as f64 * ring_step;
        let _ = writeln!(
            body,
            r##"  <circle cx="{center}" cy="{center}" r="{radius:.2}" fill="none" stroke="{RING_STROKE}" stroke-width="1"/>"##,
        );
    }

    for hour in 0..24 {
        let angle = angle_for_hour(hour);
        let (dx, dy) = (angle.cos(), angle.sin());
        let x1 = center + geometry.inner_radius * dx;
        let y1 = center + geometry.inner_radius * dy;
        let x2 = center + geometry.outer_radius * dx;
        let y2 = center + geometry.outer_radius * dy;
        let (stroke, stroke_width) = if is_major_hour(hour) {
            (SPOKE_MAJOR_STROKE, 2.0)
        } else {
            (SPOKE_STROKE, 1.0)
        };
        let _ = writeln!(
            body,
            r##"  <line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{stroke_width}"/>"##,
        );

        let anchor = match hour_label_anchor(angle) {
            LabelAnchor::Start => "start",
            LabelAnchor::Middle => "middle",
            LabelAnchor::End => "end",
        };
        let lx = center + geometry.label_radius() * dx;
        let ly = center + geometry.label_radius() * dy + 4.0;

        // Two painted copies per label: a wide white-stroked one under a
        // normal-fill one, so the text stays legible over any ring or dot.
        let _ = writeln!(
            body,
            r##"  <text x="{lx:.2}" y="{ly:.2}" text-anchor="{anchor}" font-size="12" fill="white" stroke="white" stroke-width="4">{hour}</text>"##,
        );
        let _ = writeln!(
            body,
            r##"  <text x="{lx:.2}" y="{ly:.2}" text-anchor="{anchor}" font-size="12" fill="{LABEL_FILL}">{hour}</text>"##,
        );
    }

    for event in month_events(events, month) {
        let (ox, oy) = event_offset(event.datetime, &geometry, ring_count);
        let (x, y) = (center + ox, center + oy);
        let display = resolve_display(event, categories);
        let fill = display.color.unwrap_or(NEUTRAL_DOT_FILL);

        let _ = writeln!(
            body,
            r##"  <circle cx="{x:.2}" cy="{y:.2}" r="{DOT_RADIUS}" fill="{fill}" opacity="0.85" stroke="#fff" stroke-width="1"/>"##,
        );
        let _ = writeln!(
            body,
            r##"  <text x="{x:.2}" y="{y:.2}" text-anchor="middle" dominant-baseline="central" font-size="10">{}</text>"##,
            escape_text(display.icon),
        );
    }

    let month_label = month.format("%B %Y").to_string();
    let _ = writeln!(
        body,
        r##"  <text x="{center}" y="{center}" text-anchor="middle" dominant-baseline="central" font-size="14" font-weight="600" fill="{LABEL_FILL}">{}</text>"##,
        escape_text(&month_label),
    );

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" style=\"background:white\">\n{body}</svg>\n"
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Default export file name for a month, e.g. `chronowheel-2026-03.svg`.
pub fn default_export_name(month: NaiveDate) -> String {
    format!("chronowheel-{:04}-{:02}.svg", month.year(), month.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventItem, default_categories};

    fn march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn event_at(day: u32, hour: u32, category: &str) -> EventItem {
        EventItem::new(
            NaiveDate::from_ymd_opt(2026, 3, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            category,
        )
    }

    #[test]
    fn hour_labels_are_painted_twice() {
        let svg = render_month_svg(&default_categories(), &[], march(), 800);

        let stroked = svg.matches(r##"stroke-width="4""##).count();
        assert_eq!(stroked, 24);
        // 24 stroked under-copies plus 24 fill copies plus the center label.
        assert_eq!(svg.matches("<text").count(), 49);
    }

    #[test]
    fn one_ring_per_day_of_month() {
        let svg = render_month_svg(&default_categories(), &[], march(), 800);

        // 31 rings, no event dots.
        assert_eq!(svg.matches("<circle").count(), 31);
    }

    #[test]
    fn events_render_as_dot_and_glyph() {
        let categories = default_categories();
        let events = vec![event_at(15, 13, "cat-work")];

        let svg = render_month_svg(&categories, &events, march(), 800);

        assert_eq!(svg.matches("<circle").count(), 32);
        assert!(svg.contains("💼"));
        assert!(svg.contains("#d96b5b"));
    }

    #[test]
    fn dangling_category_renders_neutral_dot() {
        let svg = render_month_svg(&default_categories(), &[event_at(2, 8, "gone")], march(), 800);

        assert!(svg.contains(NEUTRAL_DOT_FILL));
        assert!(svg.contains("❖"));
    }

    #[test]
    fn center_label_names_the_month() {
        let svg = render_month_svg(&default_categories(), &[], march(), 800);

        assert!(svg.contains("March 2026"));
    }

    #[test]
    fn export_name_embeds_year_and_month() {
        assert_eq!(default_export_name(march()), "chronowheel-2026-03.svg");
    }
}
