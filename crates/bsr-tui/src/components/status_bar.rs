//! Status bar component.
//!
//! Keybinding reference plus transient status messages at the bottom.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;

#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub struct StatusBar {
    message: String,
    bindings: Vec<KeyBinding>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: vec![
                KeyBinding::new("Tab", "Form"),
                KeyBinding::new("↑↓", "Rows"),
                KeyBinding::new("←→", "Cols"),
                KeyBinding::new("n/p", "Page"),
                KeyBinding::new("s", "Sort"),
                KeyBinding::new("Enter", "Apply/Open"),
                KeyBinding::new("?", "Help"),
                KeyBinding::new("q", "Quit"),
            ],
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::Green),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
