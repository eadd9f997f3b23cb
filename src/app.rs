use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::model::{Category, EventItem, FALLBACK_ICON};
use crate::storage::PersistedState;
use crate::ui::chart::ChartGeometry;
use crate::ui::month_view::{self, first_of_month, month_events};
use crate::ui::theme::{Theme, parse_hex_color};

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

/// Payload for a validated event submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub datetime: NaiveDateTime,
    pub category_id: String,
    pub icon: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Every state transition the UI can request. Dialog/chrome state is
/// mutated directly by the key handlers; the collections, the displayed
/// month, and the chart geometry only change through here.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddEvent(NewEvent),
    DeleteEvent(String),
    AddCategory(NewCategory),
    ClearMonth,
    ChangeMonth(NaiveDate),
    Resize(u32),
}

pub struct AppState {
    pub mode: Mode,
    /// First-of-month date identifying the displayed month.
    pub month: NaiveDate,
    pub categories: Vec<Category>,
    pub events: Vec<EventItem>,
    pub chart: ChartGeometry,
    pub theme: Theme,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub selected_event_index: usize,
    pub event_form: Option<EventForm>,
    pub category_form: Option<CategoryForm>,
    pub glyph_picker: Option<GlyphPicker>,
    pub clear_month_pending: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_persisted(PersistedState::default())
    }

    pub fn from_persisted(state: PersistedState) -> Self {
        Self {
            mode: Mode::Normal,
            month: first_of_month(Local::now().date_naive()),
            categories: state.categories,
            events: state.events,
            chart: ChartGeometry::for_width(800),
            theme: Theme::default(),
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            selected_event_index: 0,
            event_form: None,
            category_form: None,
            glyph_picker: None,
            clear_month_pending: false,
            status_message: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Snapshot handed to the store after a collection-changing action.
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            categories: self.categories.clone(),
            events: self.events.clone(),
        }
    }

    /// Applies one action and reports whether the persisted collections
    /// changed, so the caller knows to invoke the store.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddEvent(new_event) => {
                let mut event = EventItem::new(new_event.datetime, new_event.category_id);
                event.icon = new_event.icon;
                event.note = new_event.note;
                self.events.push(event);
                true
            }
            Action::DeleteEvent(id) => {
                let before = self.events.len();
                self.events.retain(|e| e.id != id);
                let changed = self.events.len() != before;
                if changed && self.selected_event_index > 0 {
                    self.selected_event_index -= 1;
                }
                changed
            }
            Action::AddCategory(new_category) => {
                if new_category.name.trim().is_empty() {
                    return false;
                }
                self.categories.push(Category::new(
                    new_category.name,
                    new_category.icon,
                    new_category.color,
                ));
                true
            }
            Action::ClearMonth => {
                let before = self.events.len();
                self.events =
                    month_view::clear_month(std::mem::take(&mut self.events), self.month);
                self.reset_event_selection();
                self.events.len() != before
            }
            Action::ChangeMonth(target) => {
                self.month = first_of_month(target);
                self.reset_event_selection();
                false
            }
            Action::Resize(width) => {
                self.chart = ChartGeometry::for_width(width);
                false
            }
        }
    }

    pub fn displayed_events(&self) -> Vec<&EventItem> {
        month_events(&self.events, self.month)
    }

    pub fn selected_event(&self) -> Option<&EventItem> {
        self.displayed_events()
            .get(self.selected_event_index)
            .copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let count = self.displayed_events().len();
        if count > 0 && self.selected_event_index < count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        if self.selected_event_index > 0 {
            self.selected_event_index -= 1;
        }
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Date,
    Time,
    Category,
    Icon,
    Note,
}

/// Input state for the new-event dialog. Date and time are typed
/// buffers parsed on submit; the category is picked by index.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub date_buffer: String,
    pub time_buffer: String,
    pub category_index: usize,
    pub icon: String,
    pub note: String,
    pub active_field: FormField,
    pub date_touched: bool,
    pub time_touched: bool,
}

impl EventForm {
    pub fn new(month: NaiveDate) -> Self {
        let now = Local::now();
        let today = now.date_naive();
        let date = if today.year() == month.year() && today.month() == month.month() {
            today
        } else {
            month
        };

        Self {
            date_buffer: date.format("%Y-%m-%d").to_string(),
            time_buffer: format!("{:02}:{:02}", now.hour(), now.minute()),
            category_index: 0,
            icon: String::new(),
            note: String::new(),
            active_field: FormField::Date,
            date_touched: false,
            time_touched: false,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Category,
            FormField::Category => FormField::Icon,
            FormField::Icon => FormField::Note,
            FormField::Note => FormField::Date,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            FormField::Date => FormField::Note,
            FormField::Time => FormField::Date,
            FormField::Category => FormField::Time,
            FormField::Icon => FormField::Category,
            FormField::Note => FormField::Icon,
        };
    }

    pub fn cycle_category(&mut self, forward: bool, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.category_index = if forward {
            (self.category_index + 1) % category_count
        } else {
            (self.category_index + category_count - 1) % category_count
        };
    }

    /// Validates the buffers into an action payload. A missing or
    /// unparsable date, time, or category yields `None` and the
    /// submission is a no-op.
    pub fn build(&self, categories: &[Category]) -> Option<NewEvent> {
        let date = NaiveDate::parse_from_str(self.date_buffer.trim(), "%Y-%m-%d").ok()?;
        let (hour, minute) = parse_time_buffer(&self.time_buffer)?;
        let category = categories.get(self.category_index)?;
        let datetime = date.and_hms_opt(hour, minute, 0)?;

        Some(NewEvent {
            datetime,
            category_id: category.id.clone(),
            icon: (!self.icon.is_empty()).then(|| self.icon.clone()),
            note: (!self.note.is_empty()).then(|| self.note.clone()),
        })
    }
}

/// Accepts `HH:MM`, `HHMM`, or a bare hour; out-of-range components
/// clamp instead of rejecting.
fn parse_time_buffer(buffer: &str) -> Option<(u32, u32)> {
    let digits = buffer.trim().replace(':', "");
    if digits.is_empty() {
        return None;
    }
    let number: u32 = digits.parse().ok()?;

    match digits.len() {
        1 | 2 => Some((number.min(23), 0)),
        3 | 4 => Some(((number / 100).min(23), (number % 100).min(59))),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryField {
    Name,
    Icon,
    Color,
}

const CATEGORY_COLOR_PALETTE: [&str; 6] = [
    "#d95b8a", "#5bd9ae", "#8a5bd9", "#d9cf5b", "#5b9fd9", "#d9835b",
];

/// Input state for the new-category dialog.
#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub name: String,
    pub icon: String,
    pub color_buffer: String,
    pub active_field: CategoryField,
}

impl CategoryForm {
    pub fn new(existing_count: usize) -> Self {
        Self {
            name: String::new(),
            icon: String::new(),
            color_buffer: CATEGORY_COLOR_PALETTE[existing_count % CATEGORY_COLOR_PALETTE.len()]
                .to_string(),
            active_field: CategoryField::Name,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = match self.active_field {
            CategoryField::Name => CategoryField::Icon,
            CategoryField::Icon => CategoryField::Color,
            CategoryField::Color => CategoryField::Name,
        };
    }

    pub fn prev_field(&mut self) {
        self.active_field = match self.active_field {
            CategoryField::Name => CategoryField::Color,
            CategoryField::Icon => CategoryField::Name,
            CategoryField::Color => CategoryField::Icon,
        };
    }

    /// An empty name or a malformed color makes the submission a no-op.
    pub fn build(&self) -> Option<NewCategory> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        parse_hex_color(&self.color_buffer)?;

        let icon = if self.icon.is_empty() {
            FALLBACK_ICON.to_string()
        } else {
            self.icon.clone()
        };

        Some(NewCategory {
            name: name.to_string(),
            icon,
            color: self.color_buffer.clone(),
        })
    }
}

/// Which pending form field a glyph-picker selection lands in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerTarget {
    EventIcon,
    CategoryIcon,
}

pub const GLYPHS: [&str; 32] = [
    "😴", "💼", "🏃", "🍽️", "🎉", "📚", "☕", "🎮", "🎵", "🎨", "🧘", "🚴",
    "✈️", "🛒", "💊", "🩺", "📞", "✉️", "🧹", "🌙", "🌞", "🍺", "🎬", "⚽",
    "🐕", "🌱", "💡", "🔧", "💰", "❤️", "⭐", "❖",
];

const PICKER_COLUMNS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPicker {
    pub target: PickerTarget,
    pub selected: usize,
}

impl GlyphPicker {
    pub fn new(target: PickerTarget) -> Self {
        Self { target, selected: 0 }
    }

    pub fn current(&self) -> &'static str {
        GLYPHS[self.selected.min(GLYPHS.len() - 1)]
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < GLYPHS.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(PICKER_COLUMNS);
    }

    pub fn move_down(&mut self) {
        if self.selected + PICKER_COLUMNS < GLYPHS.len() {
            self.selected += PICKER_COLUMNS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_categories;
    use chrono::Datelike;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state_in_march() -> AppState {
        let mut state = AppState::new();
        state.month = date(2026, 3, 1);
        state
    }

    fn add_event(state: &mut AppState, y: i32, m: u32, d: u32, hour: u32) -> bool {
        state.apply(Action::AddEvent(NewEvent {
            datetime: date(y, m, d).and_hms_opt(hour, 0, 0).unwrap(),
            category_id: "cat-work".to_string(),
            icon: None,
            note: None,
        }))
    }

    #[test]
    fn new_app_starts_in_normal_mode() {
        let state = AppState::new();
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn new_app_displays_the_current_month() {
        let state = AppState::new();
        let today = Local::now().date_naive();

        assert_eq!(state.month.year(), today.year());
        assert_eq!(state.month.month(), today.month());
        assert_eq!(state.month.day(), 1);
    }

    #[test]
    fn add_event_reports_a_persistable_change() {
        let mut state = state_in_march();

        assert!(add_event(&mut state, 2026, 3, 15, 13));
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn delete_event_removes_by_id() {
        let mut state = state_in_march();
        add_event(&mut state, 2026, 3, 15, 13);
        let id = state.events[0].id.clone();

        assert!(state.apply(Action::DeleteEvent(id)));
        assert!(state.events.is_empty());
    }

    #[test]
    fn delete_unknown_id_changes_nothing() {
        let mut state = state_in_march();
        add_event(&mut state, 2026, 3, 15, 13);

        assert!(!state.apply(Action::DeleteEvent("missing".to_string())));
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn clear_month_removes_only_displayed_month() {
        let mut state = state_in_march();
        add_event(&mut state, 2026, 3, 10, 9);
        add_event(&mut state, 2026, 3, 20, 9);
        add_event(&mut state, 2026, 4, 5, 9);

        assert!(state.apply(Action::ClearMonth));

        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].datetime.month(), 4);
        assert!(state.displayed_events().is_empty());
    }

    #[test]
    fn clear_empty_month_is_not_a_change() {
        let mut state = state_in_march();
        add_event(&mut state, 2026, 4, 5, 9);

        assert!(!state.apply(Action::ClearMonth));
    }

    #[test]
    fn add_category_with_blank_name_is_a_no_op() {
        let mut state = state_in_march();
        let before = state.categories.len();

        let changed = state.apply(Action::AddCategory(NewCategory {
            name: "   ".to_string(),
            icon: "⭐".to_string(),
            color: "#123456".to_string(),
        }));

        assert!(!changed);
        assert_eq!(state.categories.len(), before);
    }

    #[test]
    fn change_month_normalizes_to_first_of_month() {
        let mut state = state_in_march();

        state.apply(Action::ChangeMonth(date(2026, 7, 19)));

        assert_eq!(state.month, date(2026, 7, 1));
    }

    #[test]
    fn change_month_does_not_request_persistence() {
        let mut state = state_in_march();
        assert!(!state.apply(Action::ChangeMonth(date(2026, 7, 1))));
    }

    #[test]
    fn resize_is_idempotent_at_one_width() {
        let mut state = state_in_march();

        state.apply(Action::Resize(720));
        let first = state.chart;
        state.apply(Action::Resize(720));

        assert_eq!(state.chart, first);
    }

    #[test]
    fn displayed_events_follow_the_month() {
        let mut state = state_in_march();
        add_event(&mut state, 2026, 3, 15, 13);
        add_event(&mut state, 2026, 4, 2, 9);

        assert_eq!(state.displayed_events().len(), 1);

        state.apply(Action::ChangeMonth(date(2026, 4, 1)));

        assert_eq!(state.displayed_events().len(), 1);
        assert_eq!(state.displayed_events()[0].datetime.month(), 4);
    }

    #[test]
    fn event_form_build_requires_a_parsable_date() {
        let categories = default_categories();
        let mut form = EventForm::new(date(2026, 3, 1));
        form.date_buffer = "not-a-date".to_string();
        form.time_buffer = "13:30".to_string();

        assert_eq!(form.build(&categories), None);
    }

    #[test]
    fn event_form_build_requires_a_time() {
        let categories = default_categories();
        let mut form = EventForm::new(date(2026, 3, 1));
        form.date_buffer = "2026-03-15".to_string();
        form.time_buffer = String::new();

        assert_eq!(form.build(&categories), None);
    }

    #[test]
    fn event_form_build_requires_an_existing_category() {
        let mut form = EventForm::new(date(2026, 3, 1));
        form.date_buffer = "2026-03-15".to_string();
        form.time_buffer = "13:30".to_string();

        assert_eq!(form.build(&[]), None);
    }

    #[test]
    fn event_form_builds_a_full_payload() {
        let categories = default_categories();
        let mut form = EventForm::new(date(2026, 3, 1));
        form.date_buffer = "2026-03-15".to_string();
        form.time_buffer = "13:30".to_string();
        form.category_index = 1;
        form.icon = "🔥".to_string();
        form.note = "deep work".to_string();

        let payload = form.build(&categories).unwrap();

        assert_eq!(payload.datetime, date(2026, 3, 15).and_hms_opt(13, 30, 0).unwrap());
        assert_eq!(payload.category_id, "cat-work");
        assert_eq!(payload.icon.as_deref(), Some("🔥"));
        assert_eq!(payload.note.as_deref(), Some("deep work"));
    }

    #[test]
    fn bare_hour_time_buffer_means_top_of_hour() {
        assert_eq!(parse_time_buffer("9"), Some((9, 0)));
        assert_eq!(parse_time_buffer("14"), Some((14, 0)));
    }

    #[test]
    fn compact_time_buffer_splits_hour_and_minute() {
        assert_eq!(parse_time_buffer("1430"), Some((14, 30)));
        assert_eq!(parse_time_buffer("930"), Some((9, 30)));
    }

    #[test]
    fn out_of_range_time_components_clamp() {
        assert_eq!(parse_time_buffer("2575"), Some((23, 59)));
        assert_eq!(parse_time_buffer("99"), Some((23, 0)));
    }

    #[test]
    fn form_fields_cycle_both_directions() {
        let mut form = EventForm::new(date(2026, 3, 1));
        assert_eq!(form.active_field, FormField::Date);

        for _ in 0..5 {
            form.next_field();
        }
        assert_eq!(form.active_field, FormField::Date);

        form.prev_field();
        assert_eq!(form.active_field, FormField::Note);
    }

    #[test]
    fn category_cycling_wraps_around() {
        let mut form = EventForm::new(date(2026, 3, 1));

        form.cycle_category(false, 6);
        assert_eq!(form.category_index, 5);

        form.cycle_category(true, 6);
        assert_eq!(form.category_index, 0);
    }

    #[test]
    fn category_form_rejects_bad_color() {
        let mut form = CategoryForm::new(0);
        form.name = "Reading".to_string();
        form.color_buffer = "periwinkle".to_string();

        assert_eq!(form.build(), None);
    }

    #[test]
    fn category_form_defaults_empty_icon_to_fallback_glyph() {
        let mut form = CategoryForm::new(0);
        form.name = "Reading".to_string();

        let payload = form.build().unwrap();

        assert_eq!(payload.icon, FALLBACK_ICON);
    }

    #[test]
    fn glyph_picker_moves_on_an_eight_wide_grid() {
        let mut picker = GlyphPicker::new(PickerTarget::EventIcon);

        picker.move_down();
        assert_eq!(picker.selected, 8);
        picker.move_right();
        assert_eq!(picker.selected, 9);
        picker.move_up();
        assert_eq!(picker.selected, 1);
        picker.move_left();
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn glyph_picker_stops_at_the_last_glyph() {
        let mut picker = GlyphPicker::new(PickerTarget::CategoryIcon);
        picker.selected = GLYPHS.len() - 1;

        picker.move_right();
        assert_eq!(picker.selected, GLYPHS.len() - 1);
        picker.move_down();
        assert_eq!(picker.selected, GLYPHS.len() - 1);
    }
}
