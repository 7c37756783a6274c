use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Signed-in operator as seen by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Admins may use the admin dashboard view
    pub is_admin: bool,
}

impl UserInfo {
    /// Full name if set, otherwise the login
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user = UserInfo {
            id: "1".into(),
            username: "frontdesk".into(),
            full_name: None,
            email: None,
            is_admin: false,
        };
        assert_eq!(user.display_name(), "frontdesk");
        user.full_name = Some(" ".into());
        assert_eq!(user.display_name(), "frontdesk");
        user.full_name = Some("Maria Silva".into());
        assert_eq!(user.display_name(), "Maria Silva");
    }
}
