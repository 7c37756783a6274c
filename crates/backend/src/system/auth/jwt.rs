use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

use crate::shared::config;

const JWT_SECRET_KEY: &str = "jwt_secret";

static SECRET: OnceCell<String> = OnceCell::new();

/// Claims for a user, valid for `lifetime_hours` from `now`
pub fn build_claims(
    user_id: &str,
    username: &str,
    is_admin: bool,
    now: DateTime<Utc>,
    lifetime_hours: i64,
) -> TokenClaims {
    TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp: (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    }
}

pub fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Access token with the configured lifetime
pub async fn generate_access_token(user_id: &str, username: &str, is_admin: bool) -> Result<String> {
    let hours = config::current().auth.access_token_hours;
    let claims = build_claims(user_id, username, is_admin, Utc::now(), hours);
    let secret = get_jwt_secret().await?;
    encode_claims(&claims, &secret)
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

/// Opaque refresh token, stored only as a hash
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Get or create JWT secret, persisted in sys_settings
pub async fn get_jwt_secret() -> Result<String> {
    if let Some(secret) = SECRET.get() {
        return Ok(secret.clone());
    }

    let secret = match get_jwt_secret_from_db().await? {
        Some(secret) => secret,
        None => {
            let secret = generate_jwt_secret();
            save_jwt_secret_to_db(&secret).await?;
            tracing::info!("Generated a new JWT secret");
            secret
        }
    };
    // A concurrent first call may have won; keep whichever was stored first
    Ok(SECRET.get_or_init(|| secret).clone())
}

/// Pin the signing secret without touching the database
#[cfg(test)]
pub(crate) fn install_secret(secret: &str) {
    let _ = SECRET.set(secret.to_string());
}

/// 256 random bits, base64
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let result = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let now = Utc::now().to_rfc3339();
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR IGNORE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                JWT_SECRET_KEY.into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for authentication".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;

    Ok(())
}

/// Refresh token expiration timestamp (RFC 3339)
pub fn calculate_refresh_token_expiration() -> String {
    let days = config::current().auth.refresh_token_days;
    (Utc::now() + chrono::Duration::days(days)).to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let claims = build_claims("u1", "frontdesk", false, Utc::now(), 24);
        let token = encode_claims(&claims, "secret").unwrap();
        let decoded = decode_claims(&token, "secret").unwrap();
        assert_eq!(decoded.sub, "u1");
        assert_eq!(decoded.username, "frontdesk");
        assert!(!decoded.is_admin);
        assert_eq!(decoded.exp - decoded.iat, 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let claims = build_claims("u1", "admin", true, Utc::now(), 1);
        let token = encode_claims(&claims, "secret").unwrap();
        assert!(decode_claims(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issued = Utc::now() - chrono::Duration::hours(3);
        let claims = build_claims("u1", "admin", true, issued, 1);
        let token = encode_claims(&claims, "secret").unwrap();
        assert!(decode_claims(&token, "secret").is_err());
    }

    #[test]
    fn test_generated_secret_length() {
        use base64::{engine::general_purpose, Engine as _};
        let secret = generate_jwt_secret();
        assert_eq!(general_purpose::STANDARD.decode(secret).unwrap().len(), 32);
    }
}
