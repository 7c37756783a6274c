use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, error_message};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/system/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/system/auth/refresh", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the refresh token
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let request = RefreshRequest { refresh_token };

    let response = Request::post(&format!("{}/api/system/auth/logout", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&format!("{}/api/system/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
