use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::ports::RepositoryError;
use crate::response::{
    ErrorBody, CODE_BAD_REQUEST, CODE_INTERNAL_ERROR, CODE_NOT_FOUND, CODE_UNAUTHORIZED,
};
use crate::use_cases::UseCaseError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn response_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => CODE_BAD_REQUEST,
            AppError::Unauthorized(_) => CODE_UNAUTHORIZED,
            AppError::NotFound(_) => CODE_NOT_FOUND,
            AppError::Internal(_) => CODE_INTERNAL_ERROR,
        }
    }

    fn response_message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "Bad Request",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::NotFound(_) => "Transaction Not Found",
            AppError::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            response_code: self.response_code(),
            response_message: self.response_message(),
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<UseCaseError> for AppError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::NotFound => AppError::NotFound(err.to_string()),
            UseCaseError::Validation(_) | UseCaseError::AlreadySettled(_) => {
                AppError::BadRequest(err.to_string())
            }
            UseCaseError::AmountMismatch => AppError::Internal(err.to_string()),
            UseCaseError::Repository(inner) => AppError::from(inner),
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(reference) => {
                AppError::NotFound(format!("transaction not found: {reference}"))
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
