use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    constants::*,
    models::{ErrorResponse, GenericResponse},
};

#[derive(Debug)]
pub enum AppError {
    BadRequestErr(String),
    /// the candidate query failed, detail goes to the log only
    QueryFailed(anyhow::Error),
    AnyError(anyhow::Error),
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        Self::AnyError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequestErr(msg) => {
                tracing::debug!("Bad request: {}", msg);
                let response = GenericResponse {
                    success: false,
                    message: msg,
                };
                (StatusCode::BAD_REQUEST, Json(response)).into_response()
            }
            Self::QueryFailed(err) => {
                tracing::error!("Error fetching users: {:?}", err);
                let response = ErrorResponse {
                    error: INTERNAL_SERVER_ERROR_MSG.to_owned(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
            Self::AnyError(err) => {
                let msg = format!("Something went wrong: {err}");
                tracing::error!("{msg}");
                let response = GenericResponse {
                    success: false,
                    message: msg,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
        }
    }
}
