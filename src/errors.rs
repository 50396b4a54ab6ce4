use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(_) => AppError::NotFound(e.to_string()),
            DomainError::Forbidden => AppError::Forbidden(e.to_string()),
            DomainError::Ineligible(msg) => AppError::Conflict(msg),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::UnsupportedMethod(_) => AppError::BadRequest(e.to_string()),
            DomainError::FulfillmentArtifact(msg) => AppError::UpstreamFailure(msg),
            DomainError::IdentifierExhausted | DomainError::DuplicateIdentifier => {
                AppError::Internal(e.to_string())
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = |msg: &str| serde_json::json!({ "error": msg });
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body(&self.to_string())),
            AppError::Forbidden(_) => HttpResponse::Forbidden().json(body(&self.to_string())),
            AppError::Conflict(_) => HttpResponse::Conflict().json(body(&self.to_string())),
            AppError::BadRequest(_) => HttpResponse::BadRequest().json(body(&self.to_string())),
            AppError::UpstreamFailure(_) => {
                HttpResponse::BadGateway().json(body("Fulfillment artifact generation failed"))
            }
            // Internal details stay in the logs, not in the response body.
            AppError::Internal(_) => {
                HttpResponse::InternalServerError().json(body("Internal server error"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn not_found_returns_404() {
        let err: AppError = DomainError::NotFound("Customer").into();
        assert_eq!(err.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Customer not found");
    }

    #[test]
    fn forbidden_returns_403() {
        let err: AppError = DomainError::Forbidden.into();
        assert_eq!(err.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn ineligible_returns_409_with_reason() {
        let err: AppError =
            DomainError::Ineligible("Order is outside return policy timeframe".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::CONFLICT);
        assert!(err.to_string().contains("return policy timeframe"));
    }

    #[test]
    fn unsupported_method_returns_400() {
        let err: AppError = DomainError::UnsupportedMethod("CARRIER_PIGEON".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn artifact_failure_returns_502() {
        let err: AppError = DomainError::FulfillmentArtifact("encoder down".to_string()).into();
        assert_eq!(err.error_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn identifier_exhaustion_returns_500() {
        let err: AppError = DomainError::IdentifierExhausted.into();
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_error_returns_500() {
        let err: AppError = DomainError::Internal("connection refused".to_string()).into();
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
