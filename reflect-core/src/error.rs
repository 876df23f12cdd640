//! Error types for the core crate.

use thiserror::Error;

/// Errors raised while establishing who the user is.
///
/// Both variants mean "no session": the front end keeps asking for a name instead of chatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Username is empty")]
    EmptyUsername,

    #[error("Invalid username: {0}")]
    InvalidUsername(String),
}

/// Result type for core operations; uses [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
