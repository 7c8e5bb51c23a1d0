//! Choice-color table for select chips.
//!
//! Baserow names its option colors after a material palette; the light,
//! normal, and dark shades map to the palette's 300, 600, and 900 entries.
//! An unrecognized color falls back to the normal yellow accent.

use crate::api::models::ChoiceColor;
use ratatui::style::Color;

const LIGHT_BLUE: Color = Color::Rgb(0x64, 0xB5, 0xF6);
const LIGHT_GREEN: Color = Color::Rgb(0x81, 0xC7, 0x84);
const LIGHT_ORANGE: Color = Color::Rgb(0xFF, 0xB7, 0x4D);
const LIGHT_RED: Color = Color::Rgb(0xE5, 0x73, 0x73);
const LIGHT_GRAY: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
const BLUE: Color = Color::Rgb(0x1E, 0x88, 0xE5);
const GREEN: Color = Color::Rgb(0x43, 0xA0, 0x47);
const ORANGE: Color = Color::Rgb(0xFB, 0x8C, 0x00);
const RED: Color = Color::Rgb(0xE5, 0x39, 0x35);
const GRAY: Color = Color::Rgb(0x75, 0x75, 0x75);
const DARK_BLUE: Color = Color::Rgb(0x0D, 0x47, 0xA1);
const DARK_GREEN: Color = Color::Rgb(0x1B, 0x5E, 0x20);
const DARK_ORANGE: Color = Color::Rgb(0xE6, 0x51, 0x00);
const DARK_RED: Color = Color::Rgb(0xB7, 0x1C, 0x1C);
const DARK_GRAY: Color = Color::Rgb(0x21, 0x21, 0x21);

/// Fallback accent for colors this viewer does not recognize.
const FALLBACK_YELLOW: Color = Color::Rgb(0xFD, 0xD8, 0x35);

/// Background color of a chip.
pub fn chip_background(color: ChoiceColor) -> Color {
    match color {
        ChoiceColor::LightBlue => LIGHT_BLUE,
        ChoiceColor::LightGreen => LIGHT_GREEN,
        ChoiceColor::LightOrange => LIGHT_ORANGE,
        ChoiceColor::LightRed => LIGHT_RED,
        ChoiceColor::LightGray => LIGHT_GRAY,
        ChoiceColor::Blue => BLUE,
        ChoiceColor::Green => GREEN,
        ChoiceColor::Orange => ORANGE,
        ChoiceColor::Red => RED,
        ChoiceColor::Gray => GRAY,
        ChoiceColor::DarkBlue => DARK_BLUE,
        ChoiceColor::DarkGreen => DARK_GREEN,
        ChoiceColor::DarkOrange => DARK_ORANGE,
        ChoiceColor::DarkRed => DARK_RED,
        ChoiceColor::DarkGray => DARK_GRAY,
        ChoiceColor::Unknown => FALLBACK_YELLOW,
    }
}

/// Foreground color of a chip: dark text on light shades, light text on the
/// rest (the fallback yellow included).
pub fn chip_foreground(color: ChoiceColor) -> Color {
    if is_light(color) {
        Color::Black
    } else {
        Color::White
    }
}

fn is_light(color: ChoiceColor) -> bool {
    matches!(
        color,
        ChoiceColor::LightBlue
            | ChoiceColor::LightGreen
            | ChoiceColor::LightOrange
            | ChoiceColor::LightRed
            | ChoiceColor::LightGray
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_colors_get_dark_text() {
        assert_eq!(chip_foreground(ChoiceColor::LightBlue), Color::Black);
        assert_eq!(chip_foreground(ChoiceColor::LightGray), Color::Black);
    }

    #[test]
    fn dark_and_normal_colors_get_light_text() {
        assert_eq!(chip_foreground(ChoiceColor::DarkRed), Color::White);
        assert_eq!(chip_foreground(ChoiceColor::Green), Color::White);
    }

    #[test]
    fn unknown_color_falls_back_to_yellow_accent() {
        assert_eq!(chip_background(ChoiceColor::Unknown), FALLBACK_YELLOW);
        assert_eq!(chip_foreground(ChoiceColor::Unknown), Color::White);
    }

    #[test]
    fn every_documented_color_has_a_distinct_background() {
        let all = [
            ChoiceColor::LightBlue,
            ChoiceColor::LightGreen,
            ChoiceColor::LightOrange,
            ChoiceColor::LightRed,
            ChoiceColor::LightGray,
            ChoiceColor::Blue,
            ChoiceColor::Green,
            ChoiceColor::Orange,
            ChoiceColor::Red,
            ChoiceColor::Gray,
            ChoiceColor::DarkBlue,
            ChoiceColor::DarkGreen,
            ChoiceColor::DarkOrange,
            ChoiceColor::DarkRed,
            ChoiceColor::DarkGray,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(chip_background(*a), chip_background(*b));
            }
        }
    }
}
