//! Database client contract used by the reachability probe.

use async_trait::async_trait;

/// Errors raised by a [`DatabaseClient`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Database request failed: {0}")]
    Transport(String),

    #[error("Unexpected status {status} while checking database '{database}'")]
    UnexpectedStatus { database: String, status: u16 },

    #[error("CouchDB server answered with status {0}")]
    ServerStatus(u16),

    #[error("Invalid database name '{0}'")]
    InvalidDatabaseName(String),

    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),
}

/// Minimal document-database client.
///
/// # Implementations
///
/// - [`crate::infrastructure::couchdb::CouchDbClient`] - CouchDB HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Checks whether the named database exists.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the backend cannot be reached and
    /// [`ClientError::UnexpectedStatus`] for any answer other than found / not found.
    async fn db_exists(&self, name: &str) -> Result<bool, ClientError>;
}

/// Validates a database name against CouchDB naming rules.
///
/// Names must start with a lowercase letter and may contain lowercase letters,
/// digits and any of `_$()+-/`.
///
/// # Errors
///
/// Returns [`ClientError::InvalidDatabaseName`] if the name is empty or contains
/// characters outside the allowed set.
pub fn validate_database_name(name: &str) -> Result<(), ClientError> {
    let mut chars = name.chars();

    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_valid = chars.all(|c| {
        c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, '_' | '$' | '(' | ')' | '+' | '-' | '/')
    });

    if starts_with_letter && rest_valid {
        Ok(())
    } else {
        Err(ClientError::InvalidDatabaseName(name.to_string()))
    }
}
