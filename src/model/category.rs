use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Glyph shown for events whose category can no longer be resolved.
pub const FALLBACK_ICON: &str = "❖";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// The category set a fresh profile starts with. Ids are stable so that
/// sample data and tests can reference them.
pub fn default_categories() -> Vec<Category> {
    let defaults = [
        ("cat-sleep", "Sleep", "😴", "#5b7fd9"),
        ("cat-work", "Work", "💼", "#d96b5b"),
        ("cat-exercise", "Exercise", "🏃", "#58b368"),
        ("cat-meal", "Meal", "🍽️", "#e0a64e"),
        ("cat-social", "Social", "🎉", "#b65bd9"),
        ("cat-study", "Study", "📚", "#4ec0e0"),
    ];

    defaults
        .into_iter()
        .map(|(id, name, icon, color)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_gets_unique_id() {
        let a = Category::new("Reading", "📖", "#aabbcc");
        let b = Category::new("Reading", "📖", "#aabbcc");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn default_set_has_six_categories() {
        assert_eq!(default_categories().len(), 6);
    }

    #[test]
    fn default_ids_are_unique() {
        let categories = default_categories();
        let mut ids: Vec<_> = categories.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), categories.len());
    }

    #[test]
    fn default_colors_are_hex() {
        for category in default_categories() {
            assert!(category.color.starts_with('#'));
            assert_eq!(category.color.len(), 7);
        }
    }
}
