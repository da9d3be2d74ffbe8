use artsfest_core::models::Rgb;
use ratatui::style::{Color, Modifier, Style};

// Color palette, matching the board's default purple/blue/gold theme
pub const PRIMARY: Color = Color::Rgb(106, 17, 203);
pub const SECONDARY: Color = Color::Rgb(37, 117, 252);
pub const ACCENT: Color = Color::Rgb(255, 215, 0);
pub const MUTED: Color = Color::Rgb(128, 128, 128);
pub const HIGHLIGHT: Color = Color::Rgb(48, 48, 64);

pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SILVER: Color = Color::Rgb(192, 192, 192);
pub const BRONZE: Color = Color::Rgb(205, 127, 50);

pub fn title_style() -> Style {
    Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD)
}

pub fn banner_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default().bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn list_item_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn highlight_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn tab_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(SECONDARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PRIMARY)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn search_style() -> Style {
    Style::default().fg(ACCENT)
}

pub fn status_bar_style() -> Style {
    Style::default().bg(Color::Rgb(32, 32, 40)).fg(Color::White)
}

pub fn help_key_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for a 1-based rank: podium places get medal colors.
pub fn rank_style(rank: usize) -> Style {
    match rank {
        1 => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        2 => Style::default().fg(SILVER).add_modifier(Modifier::BOLD),
        3 => Style::default().fg(BRONZE).add_modifier(Modifier::BOLD),
        _ => list_item_style(),
    }
}

/// An event's configured color as a terminal color.
pub fn event_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Parse `#rrggbb` team colors; anything else renders white.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::White;
    }
    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#FF5733"), Color::Rgb(255, 87, 51));
        assert_eq!(hex_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(hex_color("#fff"), Color::White);
        assert_eq!(hex_color("#zzzzzz"), Color::White);
    }

    #[test]
    fn test_rank_style_podium() {
        assert_eq!(rank_style(1).fg, Some(GOLD));
        assert_eq!(rank_style(3).fg, Some(BRONZE));
        assert_eq!(rank_style(4), list_item_style());
    }
}
