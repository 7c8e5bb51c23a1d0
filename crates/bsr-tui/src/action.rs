//! Application actions.
//!
//! Unidirectional flow: input and spawned fetch tasks emit actions, the App
//! processes them and updates state. Fetch completions carry the generation
//! they belong to so superseded responses can be discarded.

use bsr_core::api::models::TableData;

#[derive(Debug)]
pub enum AppAction {
    /// Fetch completed successfully (generation, data)
    TableLoaded(u64, TableData),

    /// Fetch failed (generation, error message shown verbatim)
    LoadFailed(u64, String),
}
