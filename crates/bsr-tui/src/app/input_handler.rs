//! Keyboard input dispatch.
//!
//! Overlays capture keys first, then the focused panel. Editing keys only
//! reach the form when it has focus, so `q` is still typable in a field.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::components::AttachmentOverlay;

use super::{App, Focus};

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.attachment.is_some() {
            self.handle_attachment_key(code);
            return;
        }

        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(code),
            Focus::Grid => self.handle_grid_key(code),
        }
    }

    fn handle_attachment_key(&mut self, code: KeyCode) {
        let Some(overlay) = self.attachment.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc | KeyCode::Enter => self.attachment = None,
            KeyCode::Left | KeyCode::Char('h') => overlay.previous(),
            KeyCode::Right | KeyCode::Char('l') => overlay.next(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.focus = Focus::Grid,
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_previous(),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Enter => self.apply_form(),
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    /// Validate the form and kick off a fetch cycle. Re-submitting unchanged
    /// values still starts a fresh cycle.
    fn apply_form(&mut self) {
        match self.form.to_params() {
            Ok(params) => {
                self.focus = Focus::Grid;
                self.start_fetch(params);
            }
            Err(msg) => {
                self.status_bar.set_message(format!("✗ {msg}"));
            }
        }
    }

    fn handle_grid_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Char('e') => self.focus = Focus::Form,
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.grid.select_previous_row(),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_previous_column(),
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_next_column(),
            KeyCode::Char('n') => self.grid.next_page(),
            KeyCode::Char('p') => self.grid.previous_page(),
            KeyCode::Char('s') => self.grid.cycle_sort(),
            KeyCode::Enter => {
                if let Some(files) = self.grid.selected_attachments() {
                    self.attachment = Some(AttachmentOverlay::new(files));
                }
            }
            _ => {}
        }
    }
}
