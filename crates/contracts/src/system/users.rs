use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_admin: bool,
}

impl CreateUserDto {
    pub fn validate(&self) -> Result<(), String> {
        validate_username(&self.username)?;
        validate_password(&self.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    pub user_id: String,
    pub old_password: Option<String>, // None when an admin resets someone else's password
    pub new_password: String,
}

/// Letters, digits, `.`, `_` and `-`, 3 to 64 characters
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if !(3..=64).contains(&len) {
        return Err("Username must be 3 to 64 characters long".into());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err("Username may contain only letters, digits, '.', '_' and '-'".into());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("front.desk-1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("with space").is_err());
    }

    #[test]
    fn test_create_user_validation() {
        let dto = CreateUserDto {
            username: "night_audit".into(),
            password: "12345".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        let dto = CreateUserDto {
            password: "123456".into(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
