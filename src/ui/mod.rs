pub mod chart;
pub mod month_view;
pub mod svg;
pub mod theme;

pub use chart::{ChartGeometry, LabelAnchor, angle_for_time, radius_for_day};
pub use month_view::{clear_month, month_events};
pub use theme::Theme;
