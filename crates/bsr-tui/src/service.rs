//! Data loading glue over bsr-core.

use bsr_core::api::client::BaserowClient;
use bsr_core::api::models::TableData;
use bsr_core::storage::config::{ConnectionParams, ParamsStore};
use bsr_core::storage::credentials::get_token;

/// Loading state for async data.
///
/// Each fetch cycle replaces the whole state, so stale data can never render
/// alongside an error or a newer load.
#[derive(Debug, Clone, Default)]
pub enum LoadState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch cycle is in flight
    Loading,
    /// Last cycle succeeded
    Loaded(T),
    /// Last cycle failed; the message is surfaced verbatim
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Fetch schema then rows for the given parameters.
///
/// A fresh client is built per cycle because the address and token are part
/// of the parameters. Errors collapse to the display string the UI shows.
pub async fn fetch_table(params: ConnectionParams) -> Result<TableData, String> {
    let client =
        BaserowClient::new(&params.address, &params.token).map_err(|e| e.to_string())?;
    client
        .fetch_table(params.table, params.view_opt())
        .await
        .map_err(|e| e.to_string())
}

/// Startup parameter overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub address: Option<String>,
    pub token: Option<String>,
    pub table: Option<u64>,
    pub view: Option<u64>,
}

/// Initial parameters: persisted values, then the `BSR_TOKEN` environment
/// variable, then explicit command-line overrides, strongest last.
pub fn init_params(store: &dyn ParamsStore, overrides: &ParamOverrides) -> ConnectionParams {
    let mut params = store.load();

    if let Some(token) = get_token() {
        params.token = token;
    }
    if let Some(address) = &overrides.address {
        params.address = address.clone();
    }
    if let Some(token) = &overrides.token {
        params.token = token.clone();
    }
    if let Some(table) = overrides.table {
        params.table = table;
    }
    if let Some(view) = overrides.view {
        params.view = view;
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore(ConnectionParams);

    impl ParamsStore for FixedStore {
        fn load(&self) -> ConnectionParams {
            self.0.clone()
        }

        fn save(&self, _params: &ConnectionParams) -> Result<(), bsr_core::error::StorageError> {
            Ok(())
        }
    }

    #[test]
    fn overrides_beat_stored_values() {
        let store = FixedStore(ConnectionParams {
            address: "http://stored".to_string(),
            token: "stored".to_string(),
            table: 1,
            view: 2,
        });
        let overrides = ParamOverrides {
            address: Some("http://cli".to_string()),
            table: Some(7),
            ..ParamOverrides::default()
        };

        let params = init_params(&store, &overrides);
        assert_eq!(params.address, "http://cli");
        assert_eq!(params.table, 7);
        assert_eq!(params.view, 2);
    }
}
