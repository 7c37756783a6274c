use contracts::domain::a001_property::aggregate::{Property, PropertyDto};

use crate::shared::api_utils::{delete, get_json, id_from_upsert, post_json};

pub async fn fetch_all() -> Result<Vec<Property>, String> {
    get_json("/api/properties").await
}

pub async fn fetch_by_id(id: &str) -> Result<Property, String> {
    get_json(&format!("/api/properties/{}", id)).await
}

/// Create or update, returns the property id
pub async fn save(dto: &PropertyDto) -> Result<String, String> {
    let result: serde_json::Value = post_json("/api/properties", dto).await?;
    id_from_upsert(&result).ok_or_else(|| "Server did not return an id".to_string())
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/properties/{}", id)).await
}
