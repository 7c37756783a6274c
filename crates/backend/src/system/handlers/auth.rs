use axum::{extract::Json, http::StatusCode};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use contracts::system::users::User;

use crate::shared::logger;
use crate::system::auth::extractor::CurrentUser;
use crate::system::{auth::jwt, users::service as user_service};

fn user_info(user: User) -> UserInfo {
    UserInfo {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        email: user.email,
        is_admin: user.is_admin,
    }
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|e| {
            tracing::error!("Login failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            logger::log("auth", &format!("Failed login for '{}'", request.username));
            StatusCode::UNAUTHORIZED
        })?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let refresh_token = jwt::generate_refresh_token();
    store_refresh_token(&user.id, &refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    logger::log("auth", &format!("User '{}' signed in", user.username));

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: user_info(user),
    }))
}

/// POST /api/system/auth/refresh
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = validate_refresh_token(&request.refresh_token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username, user.is_admin)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, StatusCode> {
    revoke_refresh_token(&request.refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(StatusCode::OK)
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(user_info(user)))
}

// Refresh token storage, only hashes are kept

async fn store_refresh_token(user_id: &str, token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_id = uuid::Uuid::new_v4().to_string();
    let expires_at = jwt::calculate_refresh_token_expiration();
    let created_at = Utc::now().to_rfc3339();

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                token_id.into(),
                user_id.to_string().into(),
                hash_token(token).into(),
                expires_at.into(),
                created_at.into(),
            ],
        ))
        .await?;

    Ok(())
}

async fn validate_refresh_token(token: &str) -> anyhow::Result<String> {
    use crate::shared::data::db::get_connection;
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();
    let result = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), now.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "user_id")?),
        None => Err(anyhow::anyhow!("Invalid or expired refresh token")),
    }
}

async fn revoke_refresh_token(token: &str) -> anyhow::Result<()> {
    use crate::shared::data::db::get_connection;
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let revoked_at = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
            [revoked_at.into(), hash_token(token).into()],
        ))
        .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token() {
        let hash = hash_token("abc");
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_token("abd"), hash);
    }
}
