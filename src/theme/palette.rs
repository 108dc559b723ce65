//! Color palettes for the widgets

use ratatui::style::Color;

use super::Theme;

/// Named color slots used by the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub xp_filled: Color,
    pub xp_empty: Color,
    pub alert_border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 246, 240),
            text: Color::Rgb(45, 35, 30),
            text_muted: Color::Rgb(130, 120, 110),
            border: Color::Rgb(190, 175, 160),
            accent: Color::Rgb(150, 90, 40),
            xp_filled: Color::Rgb(40, 150, 150),
            xp_empty: Color::Rgb(220, 212, 200),
            alert_border: Color::Rgb(200, 140, 60),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(20, 18, 22),
            text: Color::Rgb(230, 228, 218),
            text_muted: Color::Rgb(110, 105, 100),
            border: Color::Rgb(75, 75, 100),
            accent: Color::Rgb(230, 170, 80),
            xp_filled: Color::Rgb(75, 205, 205),
            xp_empty: Color::Rgb(50, 50, 60),
            alert_border: Color::Rgb(230, 130, 60),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::light(), Palette::dark());
        assert_eq!(Theme::Dark.palette(), Palette::dark());
        assert_eq!(Palette::default(), Palette::light());
    }
}
