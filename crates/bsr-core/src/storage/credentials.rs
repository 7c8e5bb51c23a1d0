//! Token lookup from the environment.
//!
//! A token passed on the command line or typed into the form always wins;
//! this is only the `BSR_TOKEN` fallback for starting pre-authenticated.

use std::env;

/// The API token from `BSR_TOKEN`, if set and non-empty.
pub fn get_token() -> Option<String> {
    env::var("BSR_TOKEN").ok().filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_treated_as_absent() {
        let original = env::var("BSR_TOKEN").ok();

        unsafe {
            env::set_var("BSR_TOKEN", "");
        }
        assert_eq!(get_token(), None);

        unsafe {
            env::set_var("BSR_TOKEN", "tok_123");
        }
        assert_eq!(get_token(), Some("tok_123".to_string()));

        unsafe {
            match original {
                Some(value) => env::set_var("BSR_TOKEN", value),
                None => env::remove_var("BSR_TOKEN"),
            }
        }
    }
}
