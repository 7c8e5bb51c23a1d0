//! Attachment preview overlay.
//!
//! A terminal cannot show the image itself, so the lightbox becomes a
//! centered modal with the attachment's display name, dimensions, size,
//! mime type, and URL. Left/Right steps through the cell's attachments.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use bsr_core::api::models::FileAttachment;

pub struct AttachmentOverlay {
    files: Vec<FileAttachment>,
    index: usize,
}

impl AttachmentOverlay {
    pub fn new(files: Vec<FileAttachment>) -> Self {
        Self { files, index: 0 }
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.files.len() {
            self.index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    fn current(&self) -> Option<&FileAttachment> {
        self.files.get(self.index)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let file = match self.current() {
            Some(f) => f,
            None => return,
        };

        let popup_area = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::Yellow));
        let dimensions = match (file.image_width, file.image_height) {
            (Some(w), Some(h)) => format!("{w} × {h}"),
            _ => "unknown".to_string(),
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    file.visible_name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![label("  Dimensions : "), Span::raw(dimensions)]),
            Line::from(vec![
                label("  Size       : "),
                Span::raw(format_size(file.size)),
            ]),
            Line::from(vec![label("  Type       : "), Span::raw(file.mime_type.clone())]),
            Line::from(vec![
                label("  Uploaded   : "),
                Span::raw(file.uploaded_at.format("%Y-%m-%d %H:%M UTC").to_string()),
            ]),
            Line::from(vec![label("  URL        : "), Span::raw(file.url.clone())]),
        ];

        if let Some(thumb) = file.smallest_thumbnail() {
            lines.push(Line::from(vec![
                label("  Thumbnail  : "),
                Span::raw(thumb.url.clone()),
            ]));
        }
        lines.push(Line::from(""));

        if self.files.len() > 1 {
            lines.push(Line::from(Span::styled(
                format!("  Attachment {}/{}", self.index + 1, self.files.len()),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("  [", Style::default().fg(Color::DarkGray)),
            Span::styled("←→", Style::default().fg(Color::Yellow)),
            Span::styled(" Switch] [", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc/Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" Close]", Style::default().fg(Color::DarkGray)),
        ]));

        let detail = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Attachment ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(detail, popup_area);
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
