use chrono::Datelike;

use chronowheel::{
    app::{Action, AppState, NewEvent},
    ui::month_view::days_in_month,
};

/// Seeds a spread of demonstration events across the displayed month.
pub fn add_sample_events(app: &mut AppState) {
    let month = app.month;
    let last_day = days_in_month(month);

    let samples = [
        (1, 7, 30, "cat-exercise", Some("morning run")),
        (1, 23, 15, "cat-sleep", None),
        (3, 9, 0, "cat-work", None),
        (5, 12, 30, "cat-meal", Some("lunch with Sam")),
        (8, 19, 0, "cat-social", Some("board games")),
        (12, 14, 0, "cat-study", None),
        (15, 13, 30, "cat-work", Some("quarterly review")),
        (18, 6, 45, "cat-exercise", None),
        (21, 20, 30, "cat-meal", Some("dinner out")),
        (25, 10, 0, "cat-study", Some("library session")),
        (28, 22, 0, "cat-sleep", None),
    ];

    for (day, hour, minute, category_id, note) in samples {
        let day = day.min(last_day);
        let Some(date) = month.with_day(day) else { continue };
        let Some(datetime) = date.and_hms_opt(hour, minute, 0) else { continue };

        app.apply(Action::AddEvent(NewEvent {
            datetime,
            category_id: category_id.to_string(),
            icon: None,
            note: note.map(String::from),
        }));
    }
}
