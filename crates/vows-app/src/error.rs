use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Writer, async_trait};
use serde_json::json;
use thiserror::Error;

use vows_core::error::CoreError;
use vows_service::error::ServiceError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    DatabaseError(#[from] vows_db::error::DbError),

    #[error(transparent)]
    DieselError(#[from] diesel::result::Error),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "Internal server error";

impl AppError {
    /// ## Summary
    /// Maps the error onto an HTTP status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_)
            | Self::ServiceError(ServiceError::ValidationError(_))
            | Self::ServiceError(ServiceError::CoreError(
                CoreError::ValidationError(_) | CoreError::InvalidInput(_),
            ))
            | Self::CoreError(CoreError::ValidationError(_) | CoreError::InvalidInput(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) | Self::ServiceError(ServiceError::NotAuthenticated) => {
                StatusCode::UNAUTHORIZED
            }
            Self::ServiceError(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::ServiceError(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// ## Summary
    /// Returns the message shown to the client.
    ///
    /// Server errors never leak their detail.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::ServiceError(
                ServiceError::ValidationError(message)
                | ServiceError::NotFound(message)
                | ServiceError::Conflict(message),
            ) => message.clone(),
            Self::Unauthorized(message) => (*message).to_string(),
            Self::ServiceError(ServiceError::NotAuthenticated) => "Not authenticated".to_string(),
            Self::ServiceError(ServiceError::CoreError(
                CoreError::ValidationError(message) | CoreError::InvalidInput(message),
            ))
            | Self::CoreError(CoreError::ValidationError(message) | CoreError::InvalidInput(message)) => {
                message.clone()
            }
            _ => INTERNAL_MESSAGE.to_string(),
        }
    }
}

#[async_trait]
impl Writer for AppError {
    async fn write(self, req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = ?self,
                method = %req.method(),
                path = %req.uri().path(),
                "Request failed"
            );
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        res.status_code(status);
        res.render(Json(json!({ "message": self.client_message() })));
    }
}
