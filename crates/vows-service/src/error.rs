use thiserror::Error;

/// Errors from validation, auth and content services, wrapping the layers below.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] vows_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] vows_core::error::CoreError),

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Diesel error: {0}")]
    DieselError(#[from] diesel::result::Error),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationError(crate::validate::describe(&errors))
    }
}

impl ServiceError {
    /// Maps a unique-constraint violation to `Conflict`, leaving other errors as they are.
    #[must_use]
    pub fn conflict_on_unique(self, what: &str) -> Self {
        let is_unique = match &self {
            Self::DatabaseError(err) => err.unique_violation().is_some(),
            Self::DieselError(diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            )) => true,
            _ => false,
        };
        if is_unique {
            Self::Conflict(format!("{what} already exists"))
        } else {
            self
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
