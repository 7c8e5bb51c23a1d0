//! Help overlay listing all keybindings.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(50, 70, area);
        frame.render_widget(Clear, popup_area);

        let entry = |key: &'static str, action: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
                Span::raw(action),
            ])
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Form",
                Style::default().fg(Color::Cyan),
            )),
            entry("Tab/S-Tab", "Next / previous input"),
            entry("Enter", "Apply parameters and fetch"),
            entry("Esc", "Back to the grid"),
            Line::from(""),
            Line::from(Span::styled(
                "  Grid",
                Style::default().fg(Color::Cyan),
            )),
            entry("↑↓ / jk", "Move row selection"),
            entry("←→ / hl", "Move column selection"),
            entry("n / p", "Next / previous page"),
            entry("s", "Cycle sort on selected column"),
            entry("Enter", "Open attachment preview"),
            entry("Tab", "Edit connection form"),
            Line::from(""),
            Line::from(Span::styled(
                "  Global",
                Style::default().fg(Color::Cyan),
            )),
            entry("?", "Toggle this help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "  Press Esc or ? to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let help = Paragraph::new(lines).block(
            Block::default()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help, popup_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
