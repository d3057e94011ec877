//! Rejections produced by the identifier guard and the DTO validator, and
//! how they are rendered over HTTP.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::uuid::UUID_V4_EXAMPLE;

/// Why a mandatory identifier was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The value was absent or empty.
    #[error("ID é obrigatório")]
    MissingRequiredValue,

    /// The value was present but is not a UUID v4.
    #[error(
        "ID inválido: {value}. Esperado formato UUID v4 válido (ex: {example})",
        example = UUID_V4_EXAMPLE
    )]
    MalformedIdentifier { value: String },
}

/// Every message collected while validating one input object, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join("; "))]
pub struct ValidationErrors {
    pub messages: Vec<String>,
}

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

/// Errors raised by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Schema não encontrado: {0}")]
    UnknownSchema(String),

    /// The request never reached validation: axum could not extract it.
    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Json(#[from] JsonRejection),
}

/// JSON error body: `{ "statusCode": 400, "message": ..., "error": "Bad Request" }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: ErrorMessage,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

fn error_response(status: StatusCode, message: ErrorMessage) -> Response {
    let body = ErrorBody {
        status_code: status.as_u16(),
        message,
        error: status.canonical_reason().unwrap_or_default().to_string(),
    };
    (status, Json(body)).into_response()
}

fn rejection_response(status: StatusCode, message: String) -> Response {
    tracing::debug!(%status, %message, "Rejected request before validation");
    error_response(status, ErrorMessage::Single(message))
}

impl IntoResponse for IdentifierError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected identifier");
        error_response(StatusCode::BAD_REQUEST, ErrorMessage::Single(self.to_string()))
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!(count = self.messages.len(), "Rejected input object");
        error_response(StatusCode::BAD_REQUEST, ErrorMessage::Many(self.messages))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::Identifier(err) => err.into_response(),
            ServiceError::Validation(err) => err.into_response(),
            err @ ServiceError::UnknownSchema(_) => {
                tracing::debug!(error = %err, "Unknown schema requested");
                error_response(StatusCode::NOT_FOUND, ErrorMessage::Single(err.to_string()))
            }
            ServiceError::Path(rejection) => {
                rejection_response(rejection.status(), rejection.body_text())
            }
            ServiceError::Query(rejection) => {
                rejection_response(rejection.status(), rejection.body_text())
            }
            ServiceError::Json(rejection) => {
                rejection_response(rejection.status(), rejection.body_text())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message() {
        assert_eq!(IdentifierError::MissingRequiredValue.to_string(), "ID é obrigatório");
    }

    #[test]
    fn malformed_message_interpolates_value_and_example() {
        let err = IdentifierError::MalformedIdentifier { value: "123".to_string() };
        assert_eq!(
            err.to_string(),
            "ID inválido: 123. Esperado formato UUID v4 válido (ex: 550e8400-e29b-41d4-a716-446655440000)"
        );
    }

    #[test]
    fn identifier_error_is_bad_request() {
        let response = IdentifierError::MissingRequiredValue.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let response = ServiceError::UnknownSchema("ghost".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn query_rejection_keeps_status_and_uses_json_body() {
        use axum::extract::Query;
        use std::collections::HashMap;

        let uri: axum::http::Uri = "/ids?id=a&id=b".parse().unwrap();
        let rejection = Query::<HashMap<String, u8>>::try_from_uri(&uri).unwrap_err();
        let response = ServiceError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn error_body_serializes_single_and_many() {
        let single = serde_json::to_value(ErrorBody {
            status_code: 400,
            message: ErrorMessage::Single("ID é obrigatório".to_string()),
            error: "Bad Request".to_string(),
        })
        .unwrap();
        assert_eq!(single["statusCode"], 400);
        assert_eq!(single["message"], "ID é obrigatório");

        let many = serde_json::to_value(ErrorBody {
            status_code: 400,
            message: ErrorMessage::Many(vec!["a".to_string(), "b".to_string()]),
            error: "Bad Request".to_string(),
        })
        .unwrap();
        assert_eq!(many["message"], serde_json::json!(["a", "b"]));
    }
}
