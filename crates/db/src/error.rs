//! Typed error type for the db crate.

use thiserror::Error;

/// SQLSTATE raised when an insert or update would duplicate a unique value.
pub const UNIQUE_VIOLATION: &str = "23505";

/// SQLSTATE raised when a `NOT NULL` column receives `NULL`.
pub const NOT_NULL_VIOLATION: &str = "23502";

/// SQLSTATE raised when a value cannot be parsed as the column type.
pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// SQLSTATE raised when a numeric value does not fit the column type.
pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum DbError {
    /// The database server rejected the statement.
    ///
    /// `code` is the SQLSTATE reported by the server and `message` its raw
    /// error text.
    #[error("{message}")]
    Database {
        code: Option<String>,
        message: String,
    },

    /// Any other driver failure (connectivity, pool, decoding, …).
    #[error(transparent)]
    Sqlx(sqlx::Error),

    #[error("row not found")]
    NotFound,

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    /// Build a `Database` error carrying the given SQLSTATE.
    pub fn database(code: &str, message: impl Into<String>) -> Self {
        Self::Database {
            code: Some(code.to_owned()),
            message: message.into(),
        }
    }

    /// The store-defined classification of this failure, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Database { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        self.code() == Some(UNIQUE_VIOLATION)
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::Database {
                code: db_err.code().map(|c| c.into_owned()),
                message: db_err.message().to_owned(),
            },
            other => Self::Sqlx(other),
        }
    }
}
