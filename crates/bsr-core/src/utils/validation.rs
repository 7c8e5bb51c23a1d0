//! Input validation for connection parameters.

use crate::error::AppError;

/// The address must be an absolute http(s) URL; everything else produces a
/// form error before any request is attempted.
pub fn validate_address(address: &str) -> crate::Result<()> {
    if address.is_empty() {
        return Err(AppError::InvalidArguments(
            "Address cannot be empty".to_string(),
        ));
    }

    if !address.starts_with("http://") && !address.starts_with("https://") {
        return Err(AppError::InvalidArguments(format!(
            "Invalid address '{address}': must start with http:// or https://"
        )));
    }

    Ok(())
}

/// Table id must be set; 0 is the unset zero-value.
pub fn validate_table(table: u64) -> crate::Result<()> {
    if table == 0 {
        return Err(AppError::InvalidArguments(
            "Table ID must be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_addresses() {
        assert!(validate_address("http://localhost").is_ok());
        assert!(validate_address("https://baserow.example.com").is_ok());
    }

    #[test]
    fn rejects_bad_addresses() {
        assert!(validate_address("").is_err());
        assert!(validate_address("localhost:8000").is_err());
        assert!(validate_address("ftp://example.com").is_err());
    }

    #[test]
    fn rejects_zero_table_id() {
        assert!(validate_table(0).is_err());
        assert!(validate_table(5).is_ok());
    }
}
