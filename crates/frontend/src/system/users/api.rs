use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils::{delete, get_json, id_from_upsert, post_empty, post_json, put_empty};

pub async fn fetch_users() -> Result<Vec<User>, String> {
    get_json("/api/system/users").await
}

/// Create a user, returns the new id
pub async fn create_user(dto: &CreateUserDto) -> Result<String, String> {
    let result: serde_json::Value = post_json("/api/system/users", dto).await?;
    id_from_upsert(&result).ok_or_else(|| "Server did not return an id".to_string())
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<(), String> {
    put_empty(&format!("/api/system/users/{}", dto.id), dto).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    delete(&format!("/api/system/users/{}", id)).await
}

pub async fn change_password(dto: &ChangePasswordDto) -> Result<(), String> {
    post_empty(
        &format!("/api/system/users/{}/change-password", dto.user_id),
        dto,
    )
    .await
}
