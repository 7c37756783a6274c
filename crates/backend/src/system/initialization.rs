use anyhow::Result;
use contracts::system::users::CreateUserDto;

use crate::system::auth::password;
use crate::system::users::{repository, service};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Create the default admin when `sys_users` is empty
pub async fn ensure_admin_user_exists() -> Result<()> {
    if repository::count_users().await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");

    let admin_dto = CreateUserDto {
        username: DEFAULT_ADMIN_USERNAME.to_string(),
        password: DEFAULT_ADMIN_PASSWORD.to_string(),
        email: None,
        full_name: Some("Administrator".to_string()),
        is_admin: true,
    };
    // Bypasses the password policy
    let hash = password::hash_password(&admin_dto.password)?;
    let admin_id = service::insert_user(&admin_dto, &hash, None).await?;

    tracing::warn!("Default admin user created (id {})", admin_id);
    tracing::warn!(
        "Sign in as '{}' / '{}' and change the password",
        DEFAULT_ADMIN_USERNAME,
        DEFAULT_ADMIN_PASSWORD
    );

    Ok(())
}
