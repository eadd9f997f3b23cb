use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::model::EventItem;

/// True when `t` falls inside the month identified by `month` (any day
/// of that date's year/month).
pub fn in_month(t: NaiveDateTime, month: NaiveDate) -> bool {
    t.year() == month.year() && t.month() == month.month()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let year = month.year();
    let m = month.month();

    let next_month_first = if m == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, m + 1, 1)
    };

    match (NaiveDate::from_ymd_opt(year, m, 1), next_month_first) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

pub fn prev_month(month: NaiveDate) -> NaiveDate {
    let (year, m) = if month.month() == 1 {
        (month.year() - 1, 12)
    } else {
        (month.year(), month.month() - 1)
    };
    NaiveDate::from_ymd_opt(year, m, 1).unwrap_or(month)
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    let (year, m) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, m, 1).unwrap_or(month)
}

/// Events belonging to the displayed month, ordered by day-of-month.
///
/// A pure projection over the full collection; the source is never
/// mutated. Same-day events keep their insertion order — the event log
/// does not need finer ordering than the day.
pub fn month_events<'a>(events: &'a [EventItem], month: NaiveDate) -> Vec<&'a EventItem> {
    let mut selected: Vec<&EventItem> = events
        .iter()
        .filter(|e| in_month(e.datetime, month))
        .collect();
    selected.sort_by_key(|e| e.datetime.day());
    selected
}

/// Removes every event in the displayed month. Irreversible; events
/// outside the month pass through unchanged.
pub fn clear_month(events: Vec<EventItem>, month: NaiveDate) -> Vec<EventItem> {
    events
        .into_iter()
        .filter(|e| !in_month(e.datetime, month))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

/// One cell of the dot-calendar summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_today: bool,
    pub has_events: bool,
    pub is_current_month: bool,
}

impl DayCell {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_today: false,
            has_events: false,
            is_current_month: true,
        }
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }
}

/// Monday-first week grid for the dot-calendar summary of `month`.
pub fn dot_layout(events: &[EventItem], month: NaiveDate, today: NaiveDate) -> MonthLayout {
    let year = month.year();
    let month_number = month.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month_number, 1) else {
        return MonthLayout { year, month: month_number, weeks: Vec::new() };
    };

    let day_count = days_in_month(month);
    let event_days: Vec<u32> = month_events(events, month)
        .iter()
        .map(|e| e.datetime.day())
        .collect();

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    let days_before = first_day.weekday().num_days_from_monday() as u64;
    for i in 0..days_before {
        let prev_date = first_day.checked_sub_days(Days::new(days_before - i));
        current_week
            .days
            .push(DayCell::new(prev_date).with_current_month(false));
    }

    let mut current_date = first_day;
    for day in 1..=day_count {
        let cell = DayCell::new(Some(current_date))
            .with_today(current_date == today)
            .with_events(event_days.contains(&day))
            .with_current_month(true);
        current_week.days.push(cell);

        if current_date.weekday() == Weekday::Sun {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    if !current_week.days.is_empty() {
        while current_week.days.len() < 7 {
            current_week
                .days
                .push(DayCell::new(Some(current_date)).with_current_month(false));
            let Some(next) = current_date.succ_opt() else { break };
            current_date = next;
        }
        weeks.push(current_week);
    }

    MonthLayout { year, month: month_number, weeks }
}
