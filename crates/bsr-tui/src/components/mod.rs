//! UI components for bsr-tui.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

mod attachment;
mod form;
mod grid;
mod help_overlay;
pub mod state_renderer;
mod status_bar;
pub mod styles;

pub use attachment::AttachmentOverlay;
pub use form::{ConnectionForm, FormField};
pub use grid::{GridPanel, SortOrder};
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;

/// Common trait for drawable components.
pub trait Component {
    /// Draw the component within the given area.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    #[allow(dead_code)]
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}
