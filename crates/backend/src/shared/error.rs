use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Failure of a service call, mapped to an HTTP status by the handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ServiceError::NotFound(what.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Internal(e.into())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            // Internal details stay in the log
            ServiceError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Parse a path id, rejecting malformed UUIDs with 400
pub fn parse_id(id: &str) -> ServiceResult<uuid::Uuid> {
    uuid::Uuid::parse_str(id).map_err(|_| ServiceError::validation(format!("Invalid id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::not_found("Room").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::validation("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Conflict("taken".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Forbidden("admins only".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ServiceError::not_found("Room").to_string(), "Room not found");
        assert_eq!(
            ServiceError::validation("Capacity must be at least 1").to_string(),
            "Capacity must be at least 1"
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ServiceError::Conflict("Room is already booked".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-a-uuid").is_err());
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }
}
