use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unparseable { message: String, raw_text: String },
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidImage(reason) => {
                HttpError::BadRequest(format!("Invalid image: {reason}"))
            }

            ServiceError::UnparseableResponse { excerpt } => HttpError::Unparseable {
                message: "AI returned text instead of JSON".into(),
                raw_text: excerpt,
            },

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Product not found".into()),
                RepositoryError::Sqlx(err) => HttpError::Internal(format!("Database error: {err}")),
                RepositoryError::Serialization(err) => {
                    HttpError::Internal(format!("Database error: {err}"))
                }
            },

            ServiceError::ExtractionFailed(msg) => {
                HttpError::Internal(format!("AI processing failed: {msg}"))
            }

            ServiceError::Internal(msg) => HttpError::Internal(format!("Unexpected error: {msg}")),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, error, raw_text) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::Unparseable { message, raw_text } => {
                (StatusCode::BAD_REQUEST, message, Some(raw_text))
            }
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = Json(ErrorResponse { error, raw_text });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn maps_service_errors_to_status_codes() {
        assert_eq!(
            status_of(ServiceError::InvalidImage("corrupt".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::UnparseableResponse {
                excerpt: "hello...".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ServiceError::ExtractionFailed("timeout".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ServiceError::Repo(RepositoryError::Sqlx(
                sqlx::Error::PoolClosed
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_uses_product_message() {
        match HttpError::from(ServiceError::Repo(RepositoryError::NotFound)) {
            HttpError::NotFound(msg) => assert_eq!(msg, "Product not found"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn unparseable_keeps_excerpt() {
        match HttpError::from(ServiceError::UnparseableResponse {
            excerpt: "just prose...".into(),
        }) {
            HttpError::Unparseable { raw_text, .. } => assert_eq!(raw_text, "just prose..."),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
