//! Fetch cycle management.
//!
//! Each apply starts a fresh cycle on a spawned task; the generation counter
//! lets the action handler drop completions that were superseded by a newer
//! cycle.

use bsr_core::storage::config::ConnectionParams;

use crate::action::AppAction;
use crate::service;

use super::App;

impl App {
    /// Begin a new fetch cycle for `params`. Any in-flight cycle keeps
    /// running but its completion will be discarded.
    pub(super) fn start_fetch(&mut self, params: ConnectionParams) {
        self.generation += 1;
        let generation = self.generation;

        self.params = params.clone();
        self.data = service::LoadState::Loading;
        self.attachment = None;
        self.status_bar.set_message(format!(
            "Fetching table {} from {} ...",
            params.table, params.address
        ));

        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match service::fetch_table(params).await {
                Ok(data) => {
                    let _ = tx.send(AppAction::TableLoaded(generation, data));
                }
                Err(message) => {
                    let _ = tx.send(AppAction::LoadFailed(generation, message));
                }
            }
        });
    }
}
