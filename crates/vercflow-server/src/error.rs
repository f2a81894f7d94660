use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vercflow_core::VercError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<VercError>() {
            match e {
                VercError::NotInitialized => StatusCode::BAD_REQUEST,
                VercError::RecordNotFound(_)
                | VercError::ActivityNotFound(_)
                | VercError::ProjectNotFound(_)
                | VercError::ProfessionalNotFound(_) => StatusCode::NOT_FOUND,
                VercError::ProjectExists(_)
                | VercError::ProfessionalExists(_)
                | VercError::AlreadyConverted(_) => StatusCode::CONFLICT,
                VercError::InvalidSlug(_)
                | VercError::InvalidStatus(_)
                | VercError::InvalidPhase(_)
                | VercError::InvalidKind(_)
                | VercError::InvalidPriority(_) => StatusCode::BAD_REQUEST,
                VercError::InvalidTransition { .. } | VercError::MissingProject => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                VercError::Io(_) | VercError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
