//! AppAction processing.
//!
//! Actions arrive on the mpsc channel from spawned fetch tasks (and from the
//! app itself) and are folded into state between frames.

use bsr_core::api::models::TableData;

use crate::action::AppAction;
use crate::service::LoadState;

use super::App;

impl App {
    pub(super) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::TableLoaded(generation, data) => {
                self.handle_table_loaded(generation, data);
            }
            AppAction::LoadFailed(generation, message) => {
                self.handle_load_failed(generation, message);
            }
        }
    }

    fn handle_table_loaded(&mut self, generation: u64, data: TableData) {
        if generation != self.generation {
            log::debug!(
                "discarding stale table response (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        self.grid.set_data(&data);
        let row_count = data.rows.results.len();
        let field_count = data.fields.len();
        self.data = LoadState::Loaded(data);

        // Parameters are only worth remembering once they produced data.
        if let Err(e) = self.store.save(&self.params) {
            log::warn!("failed to persist connection parameters: {e}");
        }

        self.status_bar
            .set_message(format!("Loaded {row_count} rows, {field_count} fields"));
    }

    fn handle_load_failed(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            log::debug!(
                "discarding stale failure (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        self.status_bar.set_message(format!("✗ {message}"));
        self.data = LoadState::Error(message);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bsr_core::api::models::{Field, FieldType, Row, RowPage, TableData};
    use bsr_core::storage::config::{ConnectionParams, ParamsStore};
    use indexmap::IndexMap;

    use crate::action::AppAction;
    use crate::app::App;
    use crate::service::LoadState;

    #[derive(Clone, Default)]
    struct MemoryStore {
        saved: Rc<RefCell<Option<ConnectionParams>>>,
    }

    impl ParamsStore for MemoryStore {
        fn load(&self) -> ConnectionParams {
            self.saved.borrow().clone().unwrap_or_default()
        }

        fn save(&self, params: &ConnectionParams) -> bsr_core::storage::Result<()> {
            *self.saved.borrow_mut() = Some(params.clone());
            Ok(())
        }
    }

    fn sample_params() -> ConnectionParams {
        ConnectionParams {
            address: "https://baserow.example.com".into(),
            token: "tok".into(),
            table: 42,
            view: 0,
        }
    }

    fn sample_data() -> TableData {
        let field = Field {
            id: 1,
            name: "Name".into(),
            table_id: 42,
            order: 0.0,
            primary: true,
            field_type: FieldType::Text,
        };
        let mut fields_map = IndexMap::new();
        fields_map.insert("Name".to_string(), serde_json::json!("Ada"));
        let row = Row {
            id: 1,
            order: 1.0,
            fields: fields_map,
        };
        TableData {
            fields: vec![field],
            rows: RowPage {
                count: 1,
                next: None,
                previous: None,
                results: vec![row],
            },
        }
    }

    fn app_with_store() -> (App, MemoryStore) {
        let store = MemoryStore::default();
        let app = App::new(sample_params(), Box::new(store.clone()));
        (app, store)
    }

    #[test]
    fn current_generation_response_is_applied_and_persisted() {
        let (mut app, store) = app_with_store();
        app.generation = 3;

        app.handle_action(AppAction::TableLoaded(3, sample_data()));

        assert!(matches!(app.data, LoadState::Loaded(_)));
        assert!(app.grid.has_rows());
        assert_eq!(store.saved.borrow().as_ref().map(|p| p.table), Some(42));
    }

    #[test]
    fn stale_response_is_discarded() {
        let (mut app, store) = app_with_store();
        app.generation = 3;

        app.handle_action(AppAction::TableLoaded(2, sample_data()));

        assert!(matches!(app.data, LoadState::Idle));
        assert!(!app.grid.has_rows());
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn failure_sets_error_state_without_persisting() {
        let (mut app, store) = app_with_store();
        app.generation = 1;

        app.handle_action(AppAction::LoadFailed(1, "boom".into()));

        assert!(matches!(app.data, LoadState::Error(ref msg) if msg == "boom"));
        assert!(store.saved.borrow().is_none());
    }

    #[test]
    fn stale_failure_is_discarded() {
        let (mut app, _store) = app_with_store();
        app.generation = 5;
        app.handle_action(AppAction::TableLoaded(5, sample_data()));

        app.handle_action(AppAction::LoadFailed(4, "old cycle".into()));

        assert!(matches!(app.data, LoadState::Loaded(_)));
    }

}
