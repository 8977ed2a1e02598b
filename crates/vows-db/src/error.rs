use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error(transparent)]
    CoreError(#[from] vows_core::error::CoreError),
}

impl DbError {
    /// Returns the violated constraint name if this is a unique violation.
    #[must_use]
    pub fn unique_violation(&self) -> Option<&str> {
        use diesel::result::{DatabaseErrorKind, Error};

        match self {
            Self::DatabaseError(Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
                Some(info.constraint_name().unwrap_or("unique constraint"))
            }
            _ => None,
        }
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;
