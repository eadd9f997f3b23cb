use std::f64::consts::{FRAC_PI_2, PI};

use chrono::{NaiveDateTime, Timelike};

/// Smallest and largest chart sizes the layout will produce, matching
/// the narrowest and widest containers the widget is expected to fill.
pub const MIN_SIZE: f64 = 320.0;
pub const MAX_SIZE: f64 = 1100.0;

const OUTER_PADDING: f64 = 10.0;

/// Hour labels near the vertical axis overlap their tick marks when
/// anchored sideways; below this |cos| they anchor centered instead.
const SIDE_ANCHOR_THRESHOLD: f64 = 0.35;

/// Resolved dimensions of the radial chart for one observed width.
///
/// Recomputing at an unchanged width yields an identical value; nothing
/// here depends on previous layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub size: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub label_margin: f64,
}

impl ChartGeometry {
    pub fn for_width(width: u32) -> Self {
        let size = (width as f64).clamp(MIN_SIZE, MAX_SIZE);
        let inner_radius = (size * 0.05).max(32.0);
        let label_margin = (size * 0.045).max(24.0);
        let outer_radius = size / 2.0 - OUTER_PADDING - label_margin;

        Self {
            size,
            inner_radius,
            outer_radius,
            label_margin,
        }
    }

    /// Radial distance between consecutive day rings.
    pub fn ring_step(&self, ring_count: u32) -> f64 {
        (self.outer_radius - self.inner_radius) / ring_count.max(1) as f64
    }

    /// Radial midpoint of the hour-label band outside the outer ring.
    pub fn label_radius(&self) -> f64 {
        self.outer_radius + self.label_margin * 0.5
    }
}

/// Maps a timestamp to a chart angle in radians: hour 0 at the top,
/// proceeding clockwise, one full turn per 24 hours. The result is
/// meant to be used directly as `(cos, sin)` offsets from the center in
/// screen coordinates (y pointing down). Minute granularity.
pub fn angle_for_time(t: NaiveDateTime) -> f64 {
    angle_for_fraction(t.hour() as f64 + t.minute() as f64 / 60.0)
}

/// Angle of one of the 24 hour spokes.
pub fn angle_for_hour(hour: u32) -> f64 {
    angle_for_fraction(hour as f64)
}

fn angle_for_fraction(hours: f64) -> f64 {
    hours / 24.0 * 2.0 * PI - FRAC_PI_2
}

/// Maps a day-of-month to its ring radius. `day` is clamped to
/// `[1, ring_count]`: an event whose own month disagrees with the
/// displayed month's day count lands on the nearest real ring instead
/// of outside the chart.
pub fn radius_for_day(day: u32, ring_count: u32, inner_radius: f64, ring_step: f64) -> f64 {
    let day = day.clamp(1, ring_count.max(1));
    inner_radius + day as f64 * ring_step
}

/// Cartesian position of an event on the chart, relative to the center,
/// in screen coordinates.
pub fn event_offset(t: NaiveDateTime, geometry: &ChartGeometry, ring_count: u32) -> (f64, f64) {
    use chrono::Datelike;

    let angle = angle_for_time(t);
    let radius = radius_for_day(
        t.day(),
        ring_count,
        geometry.inner_radius,
        geometry.ring_step(ring_count),
    );
    (radius * angle.cos(), radius * angle.sin())
}

/// Spokes at 0/6/12/18 are drawn heavier as visual anchors.
pub fn is_major_hour(hour: u32) -> bool {
    hour % 6 == 0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

/// Horizontal anchor for an hour label at the given angle. Labels on
/// the right half anchor at their start, on the left half at their end,
/// and near the top/bottom centered.
pub fn hour_label_anchor(angle: f64) -> LabelAnchor {
    let horizontal = angle.cos();
    if horizontal.abs() > SIDE_ANCHOR_THRESHOLD {
        if horizontal > 0.0 {
            LabelAnchor::Start
        } else {
            LabelAnchor::End
        }
    } else {
        LabelAnchor::Middle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 15)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn midnight_points_straight_up() {
        assert!((angle_for_time(at(0, 0)) - (-FRAC_PI_2)).abs() < 1e-12);
    }

    #[test]
    fn noon_points_straight_down() {
        assert!((angle_for_time(at(12, 0)) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn six_am_points_right() {
        assert!(angle_for_time(at(6, 0)).abs() < 1e-12);
    }

    #[test]
    fn minutes_advance_the_angle_fractionally() {
        // 13:30 → (13.5 / 24)·2π − π/2, the reference scenario.
        let expected = 13.5 / 24.0 * 2.0 * PI - FRAC_PI_2;
        assert!((angle_for_time(at(13, 30)) - expected).abs() < 1e-12);
    }

    #[test]
    fn same_time_on_different_days_gives_same_angle() {
        let a = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(9, 45, 0)
            .unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 7, 28)
            .unwrap()
            .and_hms_opt(9, 45, 0)
            .unwrap();

        assert_eq!(angle_for_time(a), angle_for_time(b));
    }

    #[test]
    fn day_one_sits_one_step_out_from_inner_radius() {
        let geometry = ChartGeometry::for_width(800);
        let step = geometry.ring_step(31);

        let radius = radius_for_day(1, 31, geometry.inner_radius, step);

        assert!((radius - (geometry.inner_radius + step)).abs() < 1e-9);
    }

    #[test]
    fn last_day_sits_on_outer_radius() {
        let geometry = ChartGeometry::for_width(800);
        let step = geometry.ring_step(31);

        let radius = radius_for_day(31, 31, geometry.inner_radius, step);

        assert!((radius - geometry.outer_radius).abs() < 1e-9);
    }

    #[test]
    fn day_zero_clamps_to_first_ring() {
        let geometry = ChartGeometry::for_width(640);
        let step = geometry.ring_step(30);

        assert_eq!(
            radius_for_day(0, 30, geometry.inner_radius, step),
            radius_for_day(1, 30, geometry.inner_radius, step),
        );
    }

    #[test]
    fn day_beyond_ring_count_clamps_to_last_ring() {
        let geometry = ChartGeometry::for_width(640);
        let step = geometry.ring_step(28);

        assert_eq!(
            radius_for_day(33, 28, geometry.inner_radius, step),
            radius_for_day(28, 28, geometry.inner_radius, step),
        );
    }

    #[test]
    fn width_clamps_to_layout_bounds() {
        assert_eq!(ChartGeometry::for_width(100).size, MIN_SIZE);
        assert_eq!(ChartGeometry::for_width(5000).size, MAX_SIZE);
        assert_eq!(ChartGeometry::for_width(700).size, 700.0);
    }

    #[test]
    fn inner_radius_has_a_fixed_floor() {
        // 5% of 320 is 16, below the 32 floor reserved for the center label.
        assert_eq!(ChartGeometry::for_width(320).inner_radius, 32.0);
        assert_eq!(ChartGeometry::for_width(1000).inner_radius, 50.0);
    }

    #[test]
    fn geometry_is_idempotent_per_width() {
        assert_eq!(ChartGeometry::for_width(847), ChartGeometry::for_width(847));
    }

    #[test]
    fn reference_scenario_march_day_15() {
        let geometry = ChartGeometry::for_width(800);
        let step = geometry.ring_step(31);

        let radius = radius_for_day(15, 31, geometry.inner_radius, step);

        assert!((radius - (geometry.inner_radius + 15.0 * step)).abs() < 1e-9);
    }

    #[test]
    fn major_hours_are_the_quarter_marks() {
        let majors: Vec<u32> = (0..24).filter(|&h| is_major_hour(h)).collect();
        assert_eq!(majors, vec![0, 6, 12, 18]);
    }

    #[test]
    fn labels_near_vertical_axis_anchor_centered() {
        assert_eq!(hour_label_anchor(angle_for_hour(0)), LabelAnchor::Middle);
        assert_eq!(hour_label_anchor(angle_for_hour(12)), LabelAnchor::Middle);
    }

    #[test]
    fn labels_on_the_sides_anchor_outward() {
        assert_eq!(hour_label_anchor(angle_for_hour(6)), LabelAnchor::Start);
        assert_eq!(hour_label_anchor(angle_for_hour(18)), LabelAnchor::End);
    }

    proptest! {
        #[test]
        fn angle_is_monotone_within_one_day(
            h1 in 0u32..24, m1 in 0u32..60,
            h2 in 0u32..24, m2 in 0u32..60,
        ) {
            let (early, late) = if (h1, m1) <= (h2, m2) {
                ((h1, m1), (h2, m2))
            } else {
                ((h2, m2), (h1, m1))
            };

            prop_assert!(angle_for_time(at(early.0, early.1)) <= angle_for_time(at(late.0, late.1)));
        }

        #[test]
        fn angle_stays_within_one_turn(h in 0u32..24, m in 0u32..60) {
            let angle = angle_for_time(at(h, m));
            prop_assert!(angle >= -FRAC_PI_2);
            prop_assert!(angle < 2.0 * PI - FRAC_PI_2);
        }

        #[test]
        fn radius_is_monotone_in_day(
            width in 320u32..=1100,
            ring_count in 28u32..=31,
            d1 in 1u32..=31,
            d2 in 1u32..=31,
        ) {
            let geometry = ChartGeometry::for_width(width);
            let step = geometry.ring_step(ring_count);
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

            let r_lo = radius_for_day(lo, ring_count, geometry.inner_radius, step);
            let r_hi = radius_for_day(hi, ring_count, geometry.inner_radius, step);

            prop_assert!(r_lo <= r_hi + 1e-9);
            prop_assert!(r_hi <= geometry.outer_radius + 1e-9);
        }
    }
}
