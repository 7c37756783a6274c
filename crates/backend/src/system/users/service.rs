use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use crate::system::auth::password;

fn validate_email(email: &Option<String>) -> ServiceResult<()> {
    match email {
        Some(email) if !email.trim().is_empty() && !email.contains('@') => {
            Err(ServiceError::validation("Invalid email format"))
        }
        _ => Ok(()),
    }
}

/// Create a new user
pub async fn create(dto: CreateUserDto, created_by: Option<String>) -> ServiceResult<String> {
    dto.validate().map_err(ServiceError::Validation)?;
    validate_email(&dto.email)?;

    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(ServiceError::Conflict("Username already exists".into()));
    }

    let password_hash = password::hash_password(&dto.password)?;
    let user_id = insert_user(&dto, &password_hash, created_by).await?;
    logger::log("auth", &format!("User '{}' created", dto.username));
    Ok(user_id)
}

/// Insert without password policy checks (bootstrap admin)
pub async fn insert_user(
    dto: &CreateUserDto,
    password_hash: &str,
    created_by: Option<String>,
) -> anyhow::Result<String> {
    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username: dto.username.trim().to_string(),
        email: dto.email.clone(),
        full_name: dto.full_name.clone(),
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
        created_by,
    };

    repository::create_with_password(&user, password_hash).await?;
    Ok(user_id)
}

/// Update user. An admin cannot demote or deactivate the last active admin.
pub async fn update(dto: UpdateUserDto) -> ServiceResult<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))?;

    validate_email(&dto.email)?;

    let loses_admin = user.is_admin && user.is_active && (!dto.is_admin || !dto.is_active);
    if loses_admin && repository::count_other_active_admins(&user.id).await? == 0 {
        return Err(ServiceError::Conflict(
            "At least one active administrator is required".into(),
        ));
    }

    user.email = dto.email;
    user.full_name = dto.full_name;
    user.is_active = dto.is_active;
    user.is_admin = dto.is_admin;
    user.updated_at = Utc::now().to_rfc3339();

    repository::update(&user).await?;
    Ok(())
}

pub async fn delete(id: &str, requester_id: &str) -> ServiceResult<()> {
    if id == requester_id {
        return Err(ServiceError::Conflict("You cannot delete yourself".into()));
    }
    let user = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))?;
    if user.is_admin && repository::count_other_active_admins(id).await? == 0 {
        return Err(ServiceError::Conflict(
            "At least one active administrator is required".into(),
        ));
    }
    repository::delete(id).await?;
    logger::log("auth", &format!("User '{}' deleted", user.username));
    Ok(())
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<User>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<User>> {
    repository::list_all().await
}

/// Change password: own (old password required) or anyone's as admin
pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> ServiceResult<()> {
    repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Requester"))?;

    if dto.user_id != requester_id {
        if !requester.is_admin {
            return Err(ServiceError::Forbidden("Permission denied".into()));
        }
    } else {
        let old_password = dto
            .old_password
            .as_deref()
            .ok_or_else(|| ServiceError::validation("Current password is required"))?;
        let current_hash = repository::get_password_hash(&dto.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Password hash"))?;

        if !password::verify_password(old_password, &current_hash)? {
            return Err(ServiceError::validation("Current password is incorrect"));
        }
    }

    password::validate_password_strength(&dto.new_password)
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(&dto.user_id, &new_hash).await?;

    Ok(())
}

/// Verify user credentials (for login). Inactive users cannot sign in.
pub async fn verify_credentials(username: &str, password: &str) -> anyhow::Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        tracing::warn!("Login attempt for inactive user '{}'", username);
        return Ok(None);
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    if let Err(e) = repository::update_last_login(&user.id).await {
        tracing::warn!("Failed to update last login: {}", e);
    }

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email(&None).is_ok());
        assert!(validate_email(&Some(String::new())).is_ok());
        assert!(validate_email(&Some("ops@hotel.example".into())).is_ok());
        assert!(matches!(
            validate_email(&Some("ops".into())),
            Err(ServiceError::Validation(_))
        ));
    }
}
