use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::category::{Category, FALLBACK_ICON};

/// One logged occurrence. `datetime` is wall-clock time; the chart maps
/// its hour/minute to an angle and its day-of-month to a ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: String,
    #[serde(rename = "datetimeISO")]
    pub datetime: NaiveDateTime,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl EventItem {
    pub fn new(datetime: NaiveDateTime, category_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            datetime,
            category_id: category_id.into(),
            icon: None,
            note: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Display values for one event after resolving its category reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDisplay<'a> {
    pub icon: &'a str,
    pub category_name: &'a str,
    pub color: Option<&'a str>,
}

/// A dangling `category_id` is not an error: the event renders with the
/// fallback glyph, an empty category label, and no color.
pub fn resolve_display<'a>(event: &'a EventItem, categories: &'a [Category]) -> EventDisplay<'a> {
    let category = categories.iter().find(|c| c.id == event.category_id);

    let icon = event
        .icon
        .as_deref()
        .filter(|i| !i.is_empty())
        .or(category.map(|c| c.icon.as_str()))
        .unwrap_or(FALLBACK_ICON);

    EventDisplay {
        icon,
        category_name: category.map(|c| c.name.as_str()).unwrap_or(""),
        color: category.map(|c| c.color.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::default_categories;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn new_event_has_no_icon_or_note() {
        let event = EventItem::new(at(2026, 3, 15, 13, 30), "cat-work");

        assert_eq!(event.icon, None);
        assert_eq!(event.note, None);
    }

    #[test]
    fn event_icon_overrides_category_icon() {
        let categories = default_categories();
        let event = EventItem::new(at(2026, 3, 15, 13, 30), "cat-work").with_icon("🔥");

        let display = resolve_display(&event, &categories);

        assert_eq!(display.icon, "🔥");
        assert_eq!(display.category_name, "Work");
    }

    #[test]
    fn missing_event_icon_falls_back_to_category_icon() {
        let categories = default_categories();
        let event = EventItem::new(at(2026, 3, 15, 13, 30), "cat-meal");

        let display = resolve_display(&event, &categories);

        assert_eq!(display.icon, "🍽️");
    }

    #[test]
    fn dangling_category_resolves_to_fallback_display() {
        let categories = default_categories();
        let event = EventItem::new(at(2026, 3, 15, 13, 30), "no-such-category");

        let display = resolve_display(&event, &categories);

        assert_eq!(display.icon, FALLBACK_ICON);
        assert_eq!(display.category_name, "");
        assert_eq!(display.color, None);
    }

    #[test]
    fn empty_event_icon_is_treated_as_absent() {
        let categories = default_categories();
        let event = EventItem::new(at(2026, 3, 15, 13, 30), "cat-sleep").with_icon("");

        let display = resolve_display(&event, &categories);

        assert_eq!(display.icon, "😴");
    }
}
