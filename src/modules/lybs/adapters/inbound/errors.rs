// Maps application failures onto HTTP responses and GraphQL errors.

use crate::modules::lybs::core::decision::DecideError;
use crate::modules::lybs::core::rules::FieldErrors;
use crate::modules::lybs::use_cases::execute::ApplicationError;
use crate::shared::infrastructure::event_store::EventStoreError;
use async_graphql::ErrorExtensions;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const NOT_FOUND: &str = "Not found.";
const SERVER_ERROR: &str = "A server error occurred.";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub enum ApiError {
    Invalid(FieldErrors),
    BadRequest(String),
    UnsupportedMediaType(String),
    NotFound,
    Conflict(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Invalid(_) | ApiError::BadRequest(_) | ApiError::UnsupportedMediaType(_) => {
                "INVALID"
            }
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::Internal(_) => "INTERNAL",
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Invalid(errors) => errors.to_string(),
            ApiError::BadRequest(detail)
            | ApiError::UnsupportedMediaType(detail)
            | ApiError::Conflict(detail) => detail.clone(),
            ApiError::NotFound => NOT_FOUND.to_string(),
            ApiError::Internal(_) => SERVER_ERROR.to_string(),
        }
    }

    pub fn into_graphql(self) -> async_graphql::Error {
        if let ApiError::Internal(err) = &self {
            tracing::error!("internal error: {err:?}");
        }
        let code = self.code();
        async_graphql::Error::new(self.detail()).extend_with(|_, e| e.set("code", code))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Invalid(errors) => {
                tracing::warn!(%errors, "rejected invalid lyb");
                (status, Json(errors)).into_response()
            }
            ApiError::Internal(err) => {
                tracing::error!("internal server error: {err:?}");
                let detail = SERVER_ERROR.to_string();
                (status, Json(ErrorBody { detail })).into_response()
            }
            other => {
                let detail = other.detail();
                (status, Json(ErrorBody { detail })).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(DecideError::NotFound) => ApiError::NotFound,
            ApplicationError::Domain(DecideError::Invalid(errors)) => ApiError::Invalid(errors),
            ApplicationError::Domain(DecideError::AlreadyExists) => {
                ApiError::Conflict(DecideError::AlreadyExists.to_string())
            }
            ApplicationError::EventStore(e @ EventStoreError::VersionMismatch { .. }) => {
                tracing::warn!(error = %e, "concurrent write rejected");
                ApiError::Conflict("The record was modified concurrently; retry.".to_string())
            }
            ApplicationError::EventStore(e @ EventStoreError::Backend(_)) => {
                ApiError::Internal(e.into())
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(
                "Unsupported media type in request; expected application/json.".to_string(),
            ),
            other => ApiError::BadRequest(format!("JSON parse error - {}", other.body_text())),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
