use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

use crate::shared::error::ServiceError;

/// Current user from the JWT claims set by the auth middleware
///
/// Usage in handlers: `async fn handler(CurrentUser(claims): CurrentUser) -> Response`
pub struct CurrentUser(pub TokenClaims);

impl CurrentUser {
    /// Admin-only operations
    pub fn require_admin(&self) -> Result<(), ServiceError> {
        if self.0.is_admin {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(
                "This operation requires administrator rights".into(),
            ))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentUser)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
