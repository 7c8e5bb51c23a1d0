//! # bsr-core
//!
//! Core library for browsing Baserow tables from the terminal.
//!
//! Provides the HTTP client for Baserow's database API, the field/row data
//! model, the schema-to-column mapping and cell interpretation the grid is
//! built from, and persistence of connection parameters.
//!
//! ## Modules
//!
//! - [`api`]: Baserow HTTP client and data models
//! - [`grid`]: column mapping, sort comparator, colors, cell rendering
//! - [`storage`]: connection parameter persistence and token lookup
//! - [`utils`]: input validation
//! - [`error`]: error types

pub use error::AppError;

/// Prelude re-exporting the types most callers need.
pub mod prelude {
    pub use crate::Result;
    pub use crate::api::client::BaserowClient;
    pub use crate::api::models::{CellValue, Field, FieldType, Row, RowPage, TableData};
    pub use crate::error::AppError;
    pub use crate::grid::columns::{ColumnSpec, build_columns};
    pub use crate::storage::config::{ConnectionParams, FileStore, ParamsStore};
}

pub mod api;
pub mod error;
pub mod grid;
pub mod storage;
pub mod utils;

/// Convenient Result alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
