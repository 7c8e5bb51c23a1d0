//! Connection form component.
//!
//! Four inline inputs: address, token (masked), table id, view id. Editing
//! happens in place; Enter hands the parsed parameters to the app, which
//! starts a fetch cycle even when the values are unchanged.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use bsr_core::storage::config::ConnectionParams;
use bsr_core::utils::validation::{validate_address, validate_table};

use super::styles::{border_style, cursor_style};

/// The four editable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Address,
    Token,
    Table,
    View,
}

impl FormField {
    const ALL: [FormField; 4] = [
        FormField::Address,
        FormField::Token,
        FormField::Table,
        FormField::View,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn label(self) -> &'static str {
        match self {
            FormField::Address => " Address ",
            FormField::Token => " Token ",
            FormField::Table => " Table ID ",
            FormField::View => " View ID ",
        }
    }
}

pub struct ConnectionForm {
    address: String,
    token: String,
    table: String,
    view: String,
    focus: FormField,
}

impl ConnectionForm {
    /// Prefill the inputs from the persisted (or overridden) parameters.
    pub fn new(params: &ConnectionParams) -> Self {
        Self {
            address: params.address.clone(),
            token: params.token.clone(),
            // Zero means unset; show an empty input instead.
            table: match params.table {
                0 => String::new(),
                t => t.to_string(),
            },
            view: match params.view {
                0 => String::new(),
                v => v.to_string(),
            },
            focus: FormField::Address,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Address => &mut self.address,
            FormField::Token => &mut self.token,
            FormField::Table => &mut self.table,
            FormField::View => &mut self.view,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.focus;
        // Id fields only take digits; stray characters would fail the parse
        // on apply anyway.
        if matches!(field, FormField::Table | FormField::View) && !c.is_ascii_digit() {
            return;
        }
        self.value_mut(field).push(c);
    }

    pub fn delete_char(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    /// Parse and validate the inputs into connection parameters.
    pub fn to_params(&self) -> Result<ConnectionParams, String> {
        validate_address(&self.address).map_err(|e| e.to_string())?;

        let table: u64 = self
            .table
            .trim()
            .parse()
            .map_err(|_| "Table ID must be a number".to_string())?;
        validate_table(table).map_err(|e| e.to_string())?;

        let view: u64 = if self.view.trim().is_empty() {
            0
        } else {
            self.view
                .trim()
                .parse()
                .map_err(|_| "View ID must be a number".to_string())?
        };

        Ok(ConnectionParams {
            address: self.address.clone(),
            token: self.token.clone(),
            table,
            view,
        })
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Address => self.address.clone(),
            FormField::Token => "•".repeat(self.token.chars().count()),
            FormField::Table => self.table.clone(),
            FormField::View => self.view.clone(),
        }
    }

    /// Draw the four inputs side by side. `focused` marks whether keyboard
    /// focus is on the form at all; the focused field gets the cursor.
    pub fn draw(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(30),
                Constraint::Percentage(17),
                Constraint::Percentage(18),
            ])
            .split(area);

        for (field, chunk) in FormField::ALL.into_iter().zip(chunks.iter()) {
            let is_active = focused && field == self.focus;
            let mut spans = vec![Span::raw(self.display_value(field))];
            if is_active {
                spans.push(Span::styled("▌", cursor_style()));
            }

            let input = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(border_style(is_active)),
            );
            frame.render_widget(input, *chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(address: &str, token: &str, table: &str, view: &str) -> ConnectionForm {
        let mut form = ConnectionForm::new(&ConnectionParams::default());
        form.address = address.to_string();
        form.token = token.to_string();
        form.table = table.to_string();
        form.view = view.to_string();
        form
    }

    #[test]
    fn tab_order_cycles_through_all_fields() {
        let mut form = ConnectionForm::new(&ConnectionParams::default());
        assert_eq!(form.focus(), FormField::Address);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Token);
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), FormField::Address);
        form.focus_previous();
        assert_eq!(form.focus(), FormField::View);
    }

    #[test]
    fn id_fields_reject_non_digits() {
        let mut form = ConnectionForm::new(&ConnectionParams::default());
        form.focus = FormField::Table;
        form.input_char('1');
        form.input_char('x');
        form.input_char('2');
        assert_eq!(form.table, "12");
    }

    #[test]
    fn parses_valid_input() {
        let form = form_with("http://host", "abc", "5", "");
        let params = form.to_params().expect("params");
        assert_eq!(params.table, 5);
        assert_eq!(params.view, 0);
        assert_eq!(params.view_opt(), None);
    }

    #[test]
    fn rejects_bad_address_and_missing_table() {
        assert!(form_with("host", "abc", "5", "").to_params().is_err());
        assert!(form_with("http://host", "abc", "", "").to_params().is_err());
        assert!(form_with("http://host", "abc", "0", "").to_params().is_err());
    }

    #[test]
    fn token_is_masked_in_display() {
        let form = form_with("http://host", "secret", "5", "");
        assert_eq!(form.display_value(FormField::Token), "••••••");
        assert_eq!(form.display_value(FormField::Address), "http://host");
    }
}
