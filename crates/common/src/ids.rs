//! User identifier validation
//!
//! User ids are opaque strings issued by the identity provider. They are
//! restricted to a URL- and key-safe alphabet so they can be embedded in
//! paths, query strings, and canonical conversation keys.

use std::sync::LazyLock;

use crate::{Error, Result};

/// Maximum user id length
pub const MAX_USER_ID_LENGTH: usize = 64;

/// Regex for validating user ids (compiled once)
static USER_ID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("user id regex is valid")
});

/// Whether `id` is a well-formed user id
pub fn is_valid_user_id(id: &str) -> bool {
    USER_ID_REGEX.is_match(id)
}

/// Validate a user id, naming `field` in the error
pub fn validate_user_id(id: &str, field: &str) -> Result<()> {
    if is_valid_user_id(id) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{} must be 1-{} characters of letters, digits, '-' or '_'",
            field, MAX_USER_ID_LENGTH
        )))
    }
}
