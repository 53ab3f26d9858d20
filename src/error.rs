use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TodoError {
    #[error("todo {id} not found")]
    NotFound { id: i64 },

    #[error("malformed todo id: {0:?}")]
    MalformedId(String),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::NotFound { .. } | TodoError::MalformedId(_) => StatusCode::NOT_FOUND,
            TodoError::Database(_) | TodoError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            TodoError::NotFound { .. } | TodoError::MalformedId(_) => ApiErrorBody {
                code: "NOT_FOUND".to_string(),
                message: self.to_string(),
            },
            TodoError::Database(_) | TodoError::Template(_) => {
                error!(error = %self, "request failed");
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                }
            }
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
