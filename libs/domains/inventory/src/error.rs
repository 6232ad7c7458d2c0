use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("Body id {body_id:?} does not match path id {path_id}")]
    IdMismatch { path_id: u32, body_id: Option<u32> },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => {
                AppError::NotFound(format!("Product {} not found", id))
            }
            InventoryError::IdMismatch { path_id, body_id } => match body_id {
                Some(body_id) => AppError::BadRequest(format!(
                    "Body id {} does not match path id {}",
                    body_id, path_id
                )),
                None => AppError::BadRequest(format!(
                    "Body id is required and must match path id {}",
                    path_id
                )),
            },
            InventoryError::Validation(msg) => AppError::BadRequest(msg),
            InventoryError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
