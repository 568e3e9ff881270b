//! Light and dark palettes.

use crossterm::style::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// What a rendered line is, so the theme can color it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Frame,
    Field,
    CopyButton,
    GenerateButton,
    ThemeButton,
    Error,
    Hint,
}

const WHITE: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const GRAY_100: Color = Color::Rgb { r: 243, g: 244, b: 246 };
const GRAY_200: Color = Color::Rgb { r: 229, g: 231, b: 235 };
const GRAY_300: Color = Color::Rgb { r: 209, g: 213, b: 219 };
const GRAY_500: Color = Color::Rgb { r: 107, g: 114, b: 128 };
const GRAY_600: Color = Color::Rgb { r: 75, g: 85, b: 99 };
const GRAY_700: Color = Color::Rgb { r: 55, g: 65, b: 81 };
const GRAY_800: Color = Color::Rgb { r: 31, g: 41, b: 55 };
const GRAY_900: Color = Color::Rgb { r: 17, g: 24, b: 39 };
const BLUE_500: Color = Color::Rgb { r: 59, g: 130, b: 246 };
const BLUE_700: Color = Color::Rgb { r: 29, g: 78, b: 216 };
const GREEN_500: Color = Color::Rgb { r: 34, g: 197, b: 94 };
const GREEN_700: Color = Color::Rgb { r: 21, g: 128, b: 61 };
const RED_500: Color = Color::Rgb { r: 239, g: 68, b: 68 };

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Name of the mode the theme button switches to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Light => GRAY_100,
            Theme::Dark => GRAY_900,
        }
    }

    /// (foreground, background) for a line.
    pub fn colors(self, style: Style) -> (Color, Color) {
        match (self, style) {
            (Theme::Light, Style::Frame) => (GRAY_900, WHITE),
            (Theme::Dark, Style::Frame) => (WHITE, GRAY_800),
            (Theme::Light, Style::Field) => (GRAY_900, GRAY_300),
            (Theme::Dark, Style::Field) => (WHITE, GRAY_700),
            (Theme::Light, Style::CopyButton) => (WHITE, BLUE_700),
            (Theme::Dark, Style::CopyButton) => (WHITE, BLUE_500),
            (Theme::Light, Style::GenerateButton) => (WHITE, GREEN_700),
            (Theme::Dark, Style::GenerateButton) => (WHITE, GREEN_500),
            (Theme::Light, Style::ThemeButton) => (GRAY_900, GRAY_200),
            (Theme::Dark, Style::ThemeButton) => (WHITE, GRAY_600),
            (Theme::Light, Style::Error) => (RED_500, WHITE),
            (Theme::Dark, Style::Error) => (RED_500, GRAY_800),
            (Theme::Light, Style::Hint) => (GRAY_500, GRAY_100),
            (Theme::Dark, Style::Hint) => (GRAY_500, GRAY_900),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Light.switch_label(), "Dark");
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(
            Theme::Light.colors(Style::Frame),
            Theme::Dark.colors(Style::Frame)
        );
    }
}
