use crate::api::models::{Field, RowPage, TableData};
use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("bsr-tui/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one Baserow server, authenticated with a database token.
#[derive(Debug, Clone)]
pub struct BaserowClient {
    client: Client,
    pub base_url: String,
    token: String,
}

/// Join the user-supplied address and the `/api` prefix without ever
/// producing a double slash.
pub fn origin_to_base_url(origin: &str) -> String {
    if origin.ends_with('/') {
        format!("{origin}api")
    } else {
        format!("{origin}/api")
    }
}

/// Path of the field-schema endpoint for a table.
pub fn fields_path(table: u64) -> String {
    format!("/database/fields/table/{table}/")
}

/// Path of the rows endpoint for a table; `view_id` is carried only when a
/// view is set.
pub fn rows_path(table: u64, view: Option<u64>) -> String {
    let mut path = format!("/database/rows/table/{table}/?user_field_names=true");
    if let Some(view) = view {
        path.push_str(&format!("&view_id={view}"));
    }
    path
}

impl BaserowClient {
    pub fn new(address: &str, token: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::from_request(e, "client_init"))?;

        Ok(BaserowClient {
            client,
            base_url: origin_to_base_url(address),
            token: token.to_string(),
        })
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header("Authorization", format!("Token {}", self.token))
    }

    /// Fetch the field schema of a table.
    pub async fn list_fields(&self, table: u64) -> Result<Vec<Field>, ApiError> {
        let endpoint = fields_path(table);
        log::debug!("GET {}{}", self.base_url, endpoint);

        let response = self
            .build_request(Method::GET, &endpoint)
            .send()
            .await
            .map_err(|e| ApiError::from_request(e, &endpoint))?;

        Self::handle_response(response, &endpoint).await
    }

    /// Fetch the first page of rows, optionally through a saved view.
    pub async fn list_rows(&self, table: u64, view: Option<u64>) -> Result<RowPage, ApiError> {
        let endpoint = rows_path(table, view);
        log::debug!("GET {}{}", self.base_url, endpoint);

        let response = self
            .build_request(Method::GET, &endpoint)
            .send()
            .await
            .map_err(|e| ApiError::from_request(e, &endpoint))?;

        Self::handle_response(response, &endpoint).await
    }

    /// Fetch schema then rows, sequentially. The two requests are never
    /// concurrent; the rows request is not issued if the schema fetch fails.
    pub async fn fetch_table(&self, table: u64, view: Option<u64>) -> Result<TableData, ApiError> {
        let fields = self.list_fields(table).await?;
        let rows = self.list_rows(table, view).await?;
        log::debug!("fetched {} fields, {} rows", fields.len(), rows.results.len());
        Ok(TableData { fields, rows })
    }

    /// Only HTTP 200 counts as success; everything else becomes a typed error.
    async fn handle_response<T>(response: reqwest::Response, endpoint: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::OK {
            response.json::<T>().await.map_err(|e| ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    server_message: error_text,
                }),
                408 | 504 => Err(ApiError::Timeout {
                    timeout_secs: DEFAULT_TIMEOUT_SECS,
                    endpoint: endpoint.to_string(),
                }),
                _ => Err(ApiError::Http {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                    message: error_text,
                }),
            }
        }
    }
}
