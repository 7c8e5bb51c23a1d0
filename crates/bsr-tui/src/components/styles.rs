//! Shared style definitions for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

/// Style for grid header text.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the header cell of the currently selected column.
pub fn selected_column_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Style for the highlighted grid row.
pub fn row_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Highlight symbol for row selection.
pub const HIGHLIGHT_SYMBOL: &str = "► ";

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for warning/loading text.
pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

/// Style for error text.
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);

/// Style for the blinking cursor in form inputs.
pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_style_tracks_focus() {
        assert_eq!(border_style(true).fg, Some(Color::Cyan));
        assert_eq!(border_style(false).fg, Some(Color::DarkGray));
    }
}
