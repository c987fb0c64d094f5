//! Color palettes for the viewer - one per theme.

use khlex_common::Theme;
use ratatui::style::Color;

/// Concrete colors consumed by the renderer. Switching theme is a palette
/// swap; the next draw picks it up.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub error: Color,
    pub verified: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(16, 18, 24),
            foreground: Color::Rgb(220, 220, 220),
            accent: Color::Rgb(80, 180, 255),
            muted: Color::Rgb(130, 130, 140),
            highlight_bg: Color::Rgb(50, 70, 110),
            highlight_fg: Color::Rgb(240, 240, 240),
            error: Color::Rgb(255, 110, 110),
            verified: Color::Rgb(110, 220, 130),
        }
    }

    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(248, 246, 240),
            foreground: Color::Rgb(40, 40, 40),
            accent: Color::Rgb(20, 90, 180),
            muted: Color::Rgb(120, 120, 110),
            highlight_bg: Color::Rgb(200, 220, 250),
            highlight_fg: Color::Rgb(20, 20, 20),
            error: Color::Rgb(180, 40, 40),
            verified: Color::Rgb(30, 140, 60),
        }
    }

    /// Get palette for theme
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}
