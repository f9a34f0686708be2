//! Error bodies for rejected requests

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

use at_core::errors::DomainError;
use at_shared::ErrorResponse;

/// Field name reported when the body itself could not be decoded
pub const BODY_FIELD: &str = "body";

/// Errors a handler can return instead of a response
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request body")]
    Payload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Domain(DomainError::Validation(e)) => {
                ErrorResponse::with_fields(e.to_string(), e.fields().clone())
            }
            ApiError::Payload(detail) => {
                let mut fields = HashMap::new();
                fields.insert(BODY_FIELD.to_string(), vec![detail.clone()]);
                ErrorResponse::with_fields(self.to_string(), fields)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// `JsonConfig` hook turning undecodable bodies into a 422
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "Rejected malformed JSON body");
    ApiError::Payload(err.to_string()).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("The requested resource was not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use at_core::errors::ValidationError;

    #[actix_web::test]
    async fn test_validation_error_lists_fields() {
        let error = ApiError::from(DomainError::from(ValidationError::invalid_field(
            "email",
            "value is not a valid email address",
        )));

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"]["email"][0], "value is not a valid email address");
    }

    #[actix_web::test]
    async fn test_payload_error_reports_body_field() {
        let response = ApiError::Payload("missing field `email`".into()).error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(body["errors"][BODY_FIELD][0], "missing field `email`");
    }
}
