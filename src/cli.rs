use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::{Datelike, Local, NaiveDate};

use chronowheel::{
    model::{Category, EventItem, resolve_display},
    storage::{Config, StateStore},
    ui::month_view::{first_of_month, month_events},
};

#[derive(Clone, Copy)]
pub enum CliMode {
    Default { sample: bool },
    SummaryMonth(NaiveDate),
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut sample = false;
    let mut summary_month = None;
    let mut args = env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--summary" => {
                let target_month = if let Some(next) = args.peek() {
                    if !next.starts_with("--") {
                        let month_str = args.next().expect("peeked value must exist");
                        parse_summary_month(&month_str)
                            .ok_or_else(|| format!("Invalid month '{}'. Use YYYY/MM.", month_str))?
                    } else {
                        first_of_month(Local::now().date_naive())
                    }
                } else {
                    first_of_month(Local::now().date_naive())
                };
                summary_month = Some(target_month);
            }
            "--help" => {
                println!("Usage: chronowheel [--summary [YYYY/MM]] [--sample]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let Some(month) = summary_month {
        Ok(CliMode::SummaryMonth(month))
    } else {
        Ok(CliMode::Default { sample })
    }
}

fn parse_summary_month(text: &str) -> Option<NaiveDate> {
    let (year, month) = text.split_once('/')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn run_summary_mode(month: NaiveDate) -> Result<(), io::Error> {
    let config = Config::load_or_create()
        .map_err(|e| io::Error::other(e.to_string()))?;

    let store = match &config.storage.data_dir {
        Some(dir) => StateStore::at_dir(dir),
        None => StateStore::at_dir(StateStore::default_dir()),
    };
    let state = store.load();

    let events = month_events(&state.events, month);
    let summary = format_summary_text(month, &events, &state.categories);
    display_with_pager(&summary)
}

fn format_summary_text(
    month: NaiveDate,
    events: &[&EventItem],
    categories: &[Category],
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("chronowheel – {}", month.format("%B %Y")));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events logged.".to_string());
    } else {
        for event in events {
            let display = resolve_display(event, categories);
            let mut line = format!(
                "- {:>2} {:<6} {} {}",
                event.datetime.day(),
                event.datetime.format("%H:%M"),
                display.icon,
                display.category_name,
            );
            if let Some(note) = &event.note {
                line.push_str(&format!(" ({})", note));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            print!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            print!("{text}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronowheel::model::default_categories;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_year_slash_month() {
        assert_eq!(parse_summary_month("2026/03"), Some(date(2026, 3, 1)));
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert_eq!(parse_summary_month("2026/13"), None);
        assert_eq!(parse_summary_month("soon"), None);
    }

    #[test]
    fn summary_lists_events_with_resolved_categories() {
        let categories = default_categories();
        let event = EventItem::new(
            date(2026, 3, 15).and_hms_opt(13, 30, 0).unwrap(),
            "cat-work",
        )
        .with_note("quarterly review");
        let events = vec![&event];

        let text = format_summary_text(date(2026, 3, 1), &events, &categories);

        assert!(text.contains("March 2026"));
        assert!(text.contains("13:30"));
        assert!(text.contains("Work"));
        assert!(text.contains("(quarterly review)"));
    }

    #[test]
    fn summary_of_empty_month_says_so() {
        let text = format_summary_text(date(2026, 3, 1), &[], &default_categories());

        assert!(text.contains("No events logged."));
    }
}
