//! Data grid component.
//!
//! Schema-derived columns, pagination, horizontal column scrolling, and
//! per-column sort cycling. Sorting permutes an index array over the fetched
//! rows; the rows themselves are never reordered or cloned.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row as TableRow, Table, TableState},
};

use bsr_core::api::models::{CellValue, FileAttachment, Row, TableData};
use bsr_core::grid::cell::{render_cell, truncate_line};
use bsr_core::grid::columns::{ColumnSpec, build_columns};
use bsr_core::grid::sort::compare_cells;

use super::Component;
use super::styles::{
    HIGHLIGHT_SYMBOL, border_style, header_style, row_highlight_style, selected_column_style,
};
use crate::layout::grid::PAGE_SIZE;

/// Sort order for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

pub struct GridPanel {
    columns: Vec<ColumnSpec>,
    rows: Vec<Row>,
    table_state: TableState,
    page: usize,
    /// First visible column index (horizontal scroll).
    scroll_x: usize,
    selected_col: usize,
    sort_order: SortOrder,
    sort_column: Option<usize>,
    sort_indices: Option<Vec<usize>>,
}

impl Default for GridPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPanel {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            table_state: TableState::default(),
            page: 0,
            scroll_x: 0,
            selected_col: 0,
            sort_order: SortOrder::None,
            sort_column: None,
            sort_indices: None,
        }
    }

    /// Replace the grid contents with a freshly fetched table. Sort, paging,
    /// and selection reset: the new data is a new grid.
    pub fn set_data(&mut self, data: &TableData) {
        self.columns = build_columns(&data.fields);
        self.rows = data.rows.results.clone();
        self.table_state = TableState::default();
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
        self.page = 0;
        self.scroll_x = 0;
        self.selected_col = 0;
        self.sort_order = SortOrder::None;
        self.sort_column = None;
        self.sort_indices = None;
    }

    pub fn has_fields(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(PAGE_SIZE).max(1)
    }

    fn page_bounds(&self) -> (usize, usize) {
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.rows.len());
        (start, end)
    }

    /// Map a display position (in sorted order) to a row index.
    fn row_at(&self, display_idx: usize) -> Option<&Row> {
        let actual = match &self.sort_indices {
            Some(indices) => *indices.get(display_idx)?,
            None => display_idx,
        };
        self.rows.get(actual)
    }

    // === Navigation ===

    pub fn select_next_row(&mut self) {
        let (start, end) = self.page_bounds();
        let page_len = end - start;
        if page_len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < page_len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous_row(&mut self) {
        let previous = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(previous));
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.total_pages() {
            self.page += 1;
            self.table_state.select(Some(0));
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.table_state.select(Some(0));
        }
    }

    pub fn select_next_column(&mut self) {
        if self.selected_col + 1 < self.columns.len() {
            self.selected_col += 1;
        }
    }

    pub fn select_previous_column(&mut self) {
        self.selected_col = self.selected_col.saturating_sub(1);
    }

    // === Sorting ===

    /// Cycle the sort on the selected column: Ascending → Descending → None.
    /// Selecting a different column starts over at Ascending.
    pub fn cycle_sort(&mut self) {
        if self.columns.is_empty() {
            return;
        }

        if self.sort_column == Some(self.selected_col) {
            self.sort_order = match self.sort_order {
                SortOrder::None => SortOrder::Ascending,
                SortOrder::Ascending => SortOrder::Descending,
                SortOrder::Descending => SortOrder::None,
            };
            if self.sort_order == SortOrder::None {
                self.sort_column = None;
                self.sort_indices = None;
            } else {
                self.update_sort_indices();
            }
        } else {
            self.sort_column = Some(self.selected_col);
            self.sort_order = SortOrder::Ascending;
            self.update_sort_indices();
        }

        self.page = 0;
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn sort_info(&self) -> Option<(&str, SortOrder)> {
        let col = self.sort_column?;
        let spec = self.columns.get(col)?;
        Some((spec.field.name.as_str(), self.sort_order))
    }

    fn update_sort_indices(&mut self) {
        let col = match self.sort_column {
            Some(c) => c,
            None => {
                self.sort_indices = None;
                return;
            }
        };
        let field = match self.columns.get(col) {
            Some(spec) => spec.field.clone(),
            None => {
                self.sort_indices = None;
                return;
            }
        };

        let mut indices: Vec<usize> = (0..self.rows.len()).collect();
        let order = self.sort_order;
        let rows = &self.rows;
        indices.sort_by(|&a, &b| {
            let cmp = compare_cells(&rows[a].cell(&field), &rows[b].cell(&field));
            match order {
                SortOrder::Ascending => cmp,
                SortOrder::Descending => cmp.reverse(),
                SortOrder::None => std::cmp::Ordering::Equal,
            }
        });

        self.sort_indices = Some(indices);
    }

    // === Cell access ===

    fn selected_cell(&self) -> Option<CellValue> {
        let (start, _) = self.page_bounds();
        let display_idx = start + self.table_state.selected()?;
        let row = self.row_at(display_idx)?;
        let spec = self.columns.get(self.selected_col)?;
        Some(row.cell(&spec.field))
    }

    /// Attachments of the selected cell, for the preview overlay. None when
    /// the cell is not a non-empty file cell.
    pub fn selected_attachments(&self) -> Option<Vec<FileAttachment>> {
        match self.selected_cell()? {
            CellValue::Files(files) if !files.is_empty() => Some(files),
            _ => None,
        }
    }

    // === Drawing ===

    /// Visible column range for the given inner width, keeping the selected
    /// column in view.
    fn visible_range(&mut self, available: u16) -> (usize, usize) {
        if self.selected_col < self.scroll_x {
            self.scroll_x = self.selected_col;
        }

        loop {
            let mut width = 0u16;
            let mut end = self.scroll_x;
            while end < self.columns.len() {
                let col_width = self.columns[end].terminal_width() + 1;
                if width + col_width > available && end > self.scroll_x {
                    break;
                }
                width += col_width;
                end += 1;
            }

            if self.selected_col < end || self.scroll_x + 1 >= self.columns.len() {
                return (self.scroll_x, end.max(self.scroll_x + 1));
            }
            self.scroll_x += 1;
        }
    }
}

impl Component for GridPanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let available = area.width.saturating_sub(4);
        let (col_start, col_end) = self.visible_range(available);
        let visible = &self.columns[col_start..col_end.min(self.columns.len())];

        let constraints: Vec<Constraint> = visible
            .iter()
            .map(|spec| {
                if spec.flex {
                    Constraint::Min(spec.terminal_width())
                } else {
                    Constraint::Length(spec.terminal_width())
                }
            })
            .collect();

        let header_cells: Vec<Cell> = visible
            .iter()
            .enumerate()
            .map(|(i, spec)| {
                let col_idx = col_start + i;
                let mut name = spec.field.name.clone();
                if self.sort_column == Some(col_idx) {
                    name.push_str(match self.sort_order {
                        SortOrder::Ascending => " ↑",
                        SortOrder::Descending => " ↓",
                        SortOrder::None => "",
                    });
                }
                let cell = Cell::from(name);
                if col_idx == self.selected_col {
                    cell.style(selected_column_style())
                } else {
                    cell
                }
            })
            .collect();

        let (page_start, page_end) = self.page_bounds();
        let body: Vec<TableRow> = (page_start..page_end)
            .filter_map(|display_idx| self.row_at(display_idx))
            .map(|row| {
                let cells: Vec<Cell> = visible
                    .iter()
                    .map(|spec| {
                        let line = render_cell(spec.field.field_type, &row.cell(&spec.field));
                        // Flex columns stretch, so only fixed columns get the
                        // explicit cut with an ellipsis.
                        if spec.flex {
                            Cell::from(line)
                        } else {
                            Cell::from(truncate_line(&line, spec.terminal_width() as usize))
                        }
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        let page_indicator = if self.total_pages() > 1 {
            format!(
                " Page {}/{} (rows {}-{} of {})",
                self.page + 1,
                self.total_pages(),
                page_start + 1,
                page_end,
                self.rows.len()
            )
        } else {
            format!(" {} rows", self.rows.len())
        };

        let col_indicator = if self.columns.len() > visible.len() {
            format!(" │ Col {}-{}/{}", col_start + 1, col_end, self.columns.len())
        } else {
            String::new()
        };

        let sort_indicator = match self.sort_info() {
            Some((name, SortOrder::Ascending)) => format!(" │ Sort: {name} ↑"),
            Some((name, SortOrder::Descending)) => format!(" │ Sort: {name} ↓"),
            _ => String::new(),
        };

        let table = Table::new(body, constraints)
            .header(TableRow::new(header_cells).style(header_style()).bottom_margin(1))
            .block(
                Block::default()
                    .title(format!(" {page_indicator}{col_indicator}{sort_indicator} "))
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .row_highlight_style(row_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
