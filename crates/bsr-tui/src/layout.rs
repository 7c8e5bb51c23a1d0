//! Layout constants for bsr-tui.

/// Main layout constants.
pub mod main {
    /// Header panel height in rows.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Connection form height in rows (one row of bordered inputs).
    pub const FORM_HEIGHT: u16 = 3;

    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

/// Grid constants.
pub mod grid {
    /// Rows per grid page.
    pub const PAGE_SIZE: usize = 100;
}
