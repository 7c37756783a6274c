use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use contracts::system::auth::TokenClaims;

/// Bearer token from the Authorization header
fn bearer_token(req: &Request<Body>) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

async fn authenticate(token: Option<String>) -> Result<TokenClaims, StatusCode> {
    let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
    super::jwt::validate_token(&token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)
}

/// Middleware that requires valid JWT authentication
pub async fn require_auth(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = authenticate(bearer_token(&req)).await?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires admin privileges
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let claims = authenticate(bearer_token(&req)).await?;
    if !claims.is_admin {
        return Err(StatusCode::FORBIDDEN);
    }
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::jwt;
    use tower::ServiceExt;

    const TEST_SECRET: &str = "middleware-test-secret";

    fn token_for(username: &str, is_admin: bool) -> String {
        jwt::install_secret(TEST_SECRET);
        let claims = jwt::build_claims("u-1", username, is_admin, chrono::Utc::now(), 1);
        jwt::encode_claims(&claims, TEST_SECRET).unwrap()
    }

    fn get(path: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token() {
        let req = Request::builder()
            .header("Authorization", "Bearer abc.def")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def"));

        let basic = Request::builder()
            .header("Authorization", "Basic xyz")
            .body(Body::empty())
            .unwrap();
        assert_eq!(bearer_token(&basic), None);

        let missing = Request::builder().body(Body::empty()).unwrap();
        assert_eq!(bearer_token(&missing), None);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        for path in ["/api/system/users", "/api/system/auth/me", "/api/reservations"] {
            let response = crate::routes::configure_routes()
                .oneshot(get(path, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_invalid_token_is_unauthorized() {
        jwt::install_secret(TEST_SECRET);
        let response = crate::routes::configure_routes()
            .oneshot(get("/api/system/users", Some("not-a-jwt")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden_on_user_admin() {
        let token = token_for("frontdesk", false);
        let response = crate::routes::configure_routes()
            .oneshot(get("/api/system/users", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = crate::routes::configure_routes()
            .oneshot(get("/health", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
