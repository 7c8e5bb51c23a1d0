//! Application state and run loop.
//!
//! ## Module structure
//! - `mod.rs`: App struct, initialization, rendering
//! - `action_handler.rs`: AppAction processing
//! - `data_handler.rs`: fetch cycles on spawned tokio tasks
//! - `input_handler.rs`: keyboard handling

mod action_handler;
mod data_handler;
mod input_handler;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;

use bsr_core::api::models::TableData;
use bsr_core::storage::config::{ConnectionParams, ParamsStore};

use crate::action::AppAction;
use crate::components::state_renderer::{LoadStateConfig, render_empty, render_non_loaded_state};
use crate::components::{AttachmentOverlay, Component, ConnectionForm, GridPanel, HelpOverlay, StatusBar};
use crate::event::{Event, EventHandler};
use crate::layout::main::{FORM_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::service::LoadState;

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Grid,
}

pub struct App {
    pub should_quit: bool,
    pub(crate) focus: Focus,
    pub(crate) form: ConnectionForm,
    pub(crate) grid: GridPanel,
    pub(crate) status_bar: StatusBar,
    /// Current fetch cycle result; replaced wholesale each cycle.
    pub(crate) data: LoadState<TableData>,
    /// Parameters of the current fetch cycle; persisted on success only.
    pub(crate) params: ConnectionParams,
    pub(crate) store: Box<dyn ParamsStore>,
    pub(crate) action_tx: mpsc::UnboundedSender<AppAction>,
    action_rx: mpsc::UnboundedReceiver<AppAction>,
    pub(crate) show_help: bool,
    pub(crate) attachment: Option<AttachmentOverlay>,
    /// Fetch generation; completions for older generations are discarded.
    pub(crate) generation: u64,
}

impl App {
    pub fn new(params: ConnectionParams, store: Box<dyn ParamsStore>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let form = ConnectionForm::new(&params);

        // Start on the form when the parameters cannot fetch anything yet.
        let focus = if params.address.is_empty() || params.table == 0 {
            Focus::Form
        } else {
            Focus::Grid
        };

        Self {
            should_quit: false,
            focus,
            form,
            grid: GridPanel::new(),
            status_bar: StatusBar::new(),
            data: LoadState::Idle,
            params,
            store,
            action_tx,
            action_rx,
            show_help: false,
            attachment: None,
            generation: 0,
        }
    }

    /// Main loop: drain actions, draw, handle one event.
    pub async fn run_async(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> std::io::Result<()> {
        let event_handler = EventHandler::new(250);

        // Auto-fetch on startup when the stored parameters look complete.
        if !self.params.address.is_empty() && self.params.table != 0 {
            let params = self.params.clone();
            self.start_fetch(params);
        } else {
            self.status_bar
                .set_message("Enter connection parameters and press Enter");
        }

        while !self.should_quit {
            self.process_actions();

            terminal.draw(|frame| self.draw(frame))?;

            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key.code, key.modifiers),
                Event::Resize(_, _) => {}
                Event::Tick => {}
            }
        }

        Ok(())
    }

    fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.form.draw(frame, chunks[1], self.focus == Focus::Form);
        self.draw_content(frame, chunks[2]);
        self.status_bar.draw(frame, chunks[3], false);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
        if let Some(ref overlay) = self.attachment {
            overlay.render(frame, size);
        }
    }

    fn draw_content(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Grid;
        let config = LoadStateConfig::new(" Table ", focused);

        if render_non_loaded_state(frame, area, &self.data, &config) {
            return;
        }

        if !self.grid.has_fields() {
            render_empty(frame, area, &config, "No fields");
        } else if !self.grid.has_rows() {
            render_empty(frame, area, &config, "No rows");
        } else {
            self.grid.draw(frame, area, focused);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let indicator = match &self.data {
            LoadState::Idle => Span::styled(" ○ ", Style::default().fg(Color::DarkGray)),
            LoadState::Loading => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
            LoadState::Loaded(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
            LoadState::Error(_) => Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        };

        let mut spans = vec![Span::raw(" ")];
        if !self.params.address.is_empty() {
            spans.push(Span::styled(
                self.params.address.clone(),
                Style::default().fg(Color::White),
            ));
            if self.params.table != 0 {
                spans.push(Span::styled(
                    format!("  table {}", self.params.table),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if let Some(view) = self.params.view_opt() {
                spans.push(Span::styled(
                    format!("  view {view}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        spans.push(Span::styled("  │", Style::default().fg(Color::DarkGray)));
        spans.push(indicator);

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" bsr-tui ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}
