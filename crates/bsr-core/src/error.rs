use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Authentication failed: {server_message}")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },
    #[error("Network error: {message}")]
    Network { endpoint: String, message: String },
    #[error("Malformed response: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Map a reqwest transport error onto the variant it represents.
    pub fn from_request(err: reqwest::Error, endpoint: &str) -> Self {
        if err.is_timeout() {
            ApiError::Timeout {
                timeout_secs: crate::api::client::DEFAULT_TIMEOUT_SECS,
                endpoint: endpoint.to_string(),
            }
        } else if err.is_decode() {
            ApiError::Decode {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration serialize error: {message}")]
    ConfigSerialize { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status() {
        let err = ApiError::Http {
            status: 404,
            endpoint: "/database/fields/table/5/".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 404 not found");
    }

    #[test]
    fn app_error_wraps_api_error() {
        let err = AppError::from(ApiError::Network {
            endpoint: "/database/rows/table/5/".to_string(),
            message: "connection refused".to_string(),
        });
        assert!(matches!(err, AppError::Api(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
