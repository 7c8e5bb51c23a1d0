//! LoadState rendering helpers.
//!
//! Common placeholders for the non-loaded states so the grid area always
//! shows exactly one of: idle hint, loading notice, error, empty notice, or
//! the grid itself.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::styles::{TEXT_DIM, TEXT_ERROR, TEXT_WARNING, border_style};
use crate::service::LoadState;

pub struct LoadStateConfig<'a> {
    pub title: &'a str,
    pub idle_message: &'a str,
    pub loading_message: &'a str,
    pub border_style: ratatui::style::Style,
}

impl<'a> LoadStateConfig<'a> {
    pub fn new(title: &'a str, focused: bool) -> Self {
        Self {
            title,
            idle_message: "Fill in the connection form and press Enter",
            loading_message: "Now loading ...",
            border_style: border_style(focused),
        }
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(config.title)
            .borders(Borders::ALL)
            .border_style(config.border_style),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_idle(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", config.idle_message), TEXT_DIM)),
    ];
    render_placeholder(frame, area, config, lines);
}

pub fn render_loading(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  ⏳ {}", config.loading_message),
            TEXT_WARNING,
        )),
    ];
    render_placeholder(frame, area, config, lines);
}

pub fn render_error(frame: &mut Frame, area: Rect, config: &LoadStateConfig<'_>, error_msg: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  ✗ {error_msg}"), TEXT_ERROR)),
        Line::from(""),
        Line::from(Span::styled(
            "  Edit a parameter and press Enter to retry",
            TEXT_DIM,
        )),
    ];
    render_placeholder(frame, area, config, lines);
}

pub fn render_empty(
    frame: &mut Frame,
    area: Rect,
    config: &LoadStateConfig<'_>,
    empty_message: &str,
) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {empty_message}"), TEXT_DIM)),
    ];
    render_placeholder(frame, area, config, lines);
}

/// Render the non-Loaded states. Returns true when one was rendered; the
/// caller draws the grid only on false.
pub fn render_non_loaded_state<T>(
    frame: &mut Frame,
    area: Rect,
    state: &LoadState<T>,
    config: &LoadStateConfig<'_>,
) -> bool {
    match state {
        LoadState::Idle => {
            render_idle(frame, area, config);
            true
        }
        LoadState::Loading => {
            render_loading(frame, area, config);
            true
        }
        LoadState::Error(msg) => {
            render_error(frame, area, config, msg);
            true
        }
        LoadState::Loaded(_) => false,
    }
}
