use chrono::{Datelike, NaiveDate};

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Goto(NaiveDate),
    Theme(String),
    Clear,
    Export(Option<String>),
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    if !trimmed.starts_with(':') {
        return Command::Error("Commands must start with ':'".to_string());
    }

    let command_text = &trimmed[1..];
    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a month argument".to_string())
            } else if let Some(month) = parse_month(parts[1]) {
                Command::Goto(month)
            } else {
                Command::Error(format!("Invalid month format: {}", parts[1]))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        "clear" => Command::Clear,
        "export" => {
            if parts.len() < 2 {
                Command::Export(None)
            } else {
                Command::Export(Some(parts[1].to_string()))
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Accepts `YYYY-MM` or a full `YYYY-MM-DD`; either way the result is
/// normalized to the first of the month.
fn parse_month(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
    }

    let (year, month) = text.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_help_command() {
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn parse_goto_with_year_month() {
        assert_eq!(parse_command(":goto 2026-07"), Command::Goto(date(2026, 7, 1)));
    }

    #[test]
    fn parse_goto_with_full_date_normalizes_to_first() {
        assert_eq!(
            parse_command(":goto 2026-07-19"),
            Command::Goto(date(2026, 7, 1))
        );
    }

    #[test]
    fn parse_goto_with_invalid_month_returns_error() {
        assert!(matches!(parse_command(":goto 2026-13"), Command::Error(_)));
        assert!(matches!(parse_command(":goto soon"), Command::Error(_)));
    }

    #[test]
    fn parse_goto_without_argument_returns_error() {
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_theme_command() {
        assert_eq!(
            parse_command(":theme gruvbox"),
            Command::Theme("gruvbox".to_string())
        );
    }

    #[test]
    fn parse_theme_without_name_returns_error() {
        assert!(matches!(parse_command(":theme"), Command::Error(_)));
    }

    #[test]
    fn parse_clear_command() {
        assert_eq!(parse_command(":clear"), Command::Clear);
    }

    #[test]
    fn parse_export_without_path_uses_default() {
        assert_eq!(parse_command(":export"), Command::Export(None));
    }

    #[test]
    fn parse_export_with_path() {
        assert_eq!(
            parse_command(":export wheel.svg"),
            Command::Export(Some("wheel.svg".to_string()))
        );
    }

    #[test]
    fn parse_unknown_command_returns_error() {
        assert!(matches!(parse_command(":frobnicate"), Command::Error(_)));
    }

    #[test]
    fn parse_command_without_colon_returns_error() {
        assert!(matches!(parse_command("quit"), Command::Error(_)));
    }

    #[test]
    fn parse_empty_command_returns_error() {
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }
}
