//! Color palettes for the terminal UI.

use ratatui::style::{palette::tailwind, Color};

/// Resolved colors used by views and components.
#[derive(Debug, Clone, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selected_row_fg: Color,
    pub row_fg: Color,
    pub row_bg: Color,
    pub border_color: Color,
    pub scroll_bar_fg: Color,
    pub label: Color,
}

impl Colors {
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        let header_bg = if true_color_enabled {
            color.c900
        } else {
            color.c500
        };

        Self {
            buffer_bg: Color::Black,
            header_bg,
            header_fg: Color::Black,
            selected_row_fg: color.c400,
            row_fg: Color::White,
            row_bg: Color::Black,
            border_color: color.c400,
            scroll_bar_fg: Color::Black,
            label: color.c400,
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::new(Theme::Blue.to_palette(false), false)
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

const BASIC_BLUE_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightCyan,
    c100: Color::LightCyan,
    c200: Color::LightCyan,
    c300: Color::LightCyan,
    c400: Color::LightCyan,
    c500: Color::Cyan,
    c600: Color::Cyan,
    c700: Color::Cyan,
    c800: Color::Cyan,
    c900: Color::Cyan,
    c950: Color::Cyan,
};

const BASIC_GREEN_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightGreen,
    c100: Color::LightGreen,
    c200: Color::LightGreen,
    c300: Color::LightGreen,
    c400: Color::LightGreen,
    c500: Color::Green,
    c600: Color::Green,
    c700: Color::Green,
    c800: Color::Green,
    c900: Color::Green,
    c950: Color::Green,
};

const BASIC_MAGENTA_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightMagenta,
    c100: Color::LightMagenta,
    c200: Color::LightMagenta,
    c300: Color::LightMagenta,
    c400: Color::LightMagenta,
    c500: Color::Magenta,
    c600: Color::Magenta,
    c700: Color::Magenta,
    c800: Color::Magenta,
    c900: Color::Magenta,
    c950: Color::Magenta,
};

const BASIC_RED_PALETTE: tailwind::Palette = tailwind::Palette {
    c50: Color::LightRed,
    c100: Color::LightRed,
    c200: Color::LightRed,
    c300: Color::LightRed,
    c400: Color::LightRed,
    c500: Color::Red,
    c600: Color::Red,
    c700: Color::Red,
    c800: Color::Red,
    c900: Color::Red,
    c950: Color::Red,
};

impl Theme {
    pub fn from_string(value: &str) -> Theme {
        match value {
            "Blue" => Theme::Blue,
            "Emerald" => Theme::Emerald,
            "Indigo" => Theme::Indigo,
            "Red" => Theme::Red,
            _ => Theme::Blue,
        }
    }

    pub fn to_palette(&self, true_color_enabled: bool) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
                Theme::Indigo => &BASIC_MAGENTA_PALETTE,
                Theme::Red => &BASIC_RED_PALETTE,
            }
        }
    }
}

/// Detects whether the terminal supports 16m colors.
pub fn true_color_enabled() -> bool {
    match supports_color::on(supports_color::Stream::Stdout) {
        Some(support) => support.has_16m,
        _ => false,
    }
}
