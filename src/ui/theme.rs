use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub title: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub today: Color,
    pub ring: Color,
    pub spoke: Color,
    pub spoke_major: Color,
    pub hour_label: Color,
    pub dot_marker: Color,
    pub weekday_header: Color,
    pub inactive_day: Color,
    pub status_bar: Color,
    pub help_title: Color,
    pub help_section: Color,
    pub command_mode: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            title: Color::Cyan,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            today: Color::Green,
            ring: Color::DarkGray,
            spoke: Color::DarkGray,
            spoke_major: Color::Gray,
            hour_label: Color::Yellow,
            dot_marker: Color::Cyan,
            weekday_header: Color::Yellow,
            inactive_day: Color::DarkGray,
            status_bar: Color::White,
            help_title: Color::Cyan,
            help_section: Color::Yellow,
            command_mode: Color::White,
            error: Color::Red,
            success: Color::Green,
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            title: Color::Rgb(251, 184, 108),
            selected_bg: Color::Rgb(60, 56, 54),
            selected_fg: Color::Rgb(235, 219, 178),
            today: Color::Rgb(184, 187, 38),
            ring: Color::Rgb(80, 73, 69),
            spoke: Color::Rgb(80, 73, 69),
            spoke_major: Color::Rgb(146, 131, 116),
            hour_label: Color::Rgb(250, 189, 47),
            dot_marker: Color::Rgb(142, 192, 124),
            weekday_header: Color::Rgb(254, 128, 25),
            inactive_day: Color::Rgb(146, 131, 116),
            status_bar: Color::Rgb(235, 219, 178),
            help_title: Color::Rgb(251, 184, 108),
            help_section: Color::Rgb(254, 128, 25),
            command_mode: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            success: Color::Rgb(184, 187, 38),
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            title: Color::Rgb(136, 192, 208),
            selected_bg: Color::Rgb(59, 66, 82),
            selected_fg: Color::Rgb(236, 239, 244),
            today: Color::Rgb(163, 190, 140),
            ring: Color::Rgb(67, 76, 94),
            spoke: Color::Rgb(67, 76, 94),
            spoke_major: Color::Rgb(76, 86, 106),
            hour_label: Color::Rgb(235, 203, 139),
            dot_marker: Color::Rgb(129, 161, 193),
            weekday_header: Color::Rgb(235, 203, 139),
            inactive_day: Color::Rgb(76, 86, 106),
            status_bar: Color::Rgb(216, 222, 233),
            help_title: Color::Rgb(136, 192, 208),
            help_section: Color::Rgb(235, 203, 139),
            command_mode: Color::Rgb(216, 222, 233),
            error: Color::Rgb(191, 97, 106),
            success: Color::Rgb(163, 190, 140),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            title: Color::Rgb(139, 233, 253),
            selected_bg: Color::Rgb(68, 71, 90),
            selected_fg: Color::Rgb(248, 248, 242),
            today: Color::Rgb(80, 250, 123),
            ring: Color::Rgb(68, 71, 90),
            spoke: Color::Rgb(68, 71, 90),
            spoke_major: Color::Rgb(98, 114, 164),
            hour_label: Color::Rgb(241, 250, 140),
            dot_marker: Color::Rgb(255, 121, 198),
            weekday_header: Color::Rgb(241, 250, 140),
            inactive_day: Color::Rgb(98, 114, 164),
            status_bar: Color::Rgb(248, 248, 242),
            help_title: Color::Rgb(139, 233, 253),
            help_section: Color::Rgb(241, 250, 140),
            command_mode: Color::Rgb(248, 248, 242),
            error: Color::Rgb(255, 85, 85),
            success: Color::Rgb(80, 250, 123),
        }
    }

    pub fn get_by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            _ => Self::default_theme(),
        }
    }

    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "gruvbox", "nord", "dracula"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Parses a `#rrggbb` category color into a terminal color. Anything
/// else yields `None` and the caller falls back to a theme color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
