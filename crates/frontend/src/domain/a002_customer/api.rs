use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};

use crate::shared::api_utils::{delete, get_json, id_from_upsert, post_json};

pub async fn fetch_all() -> Result<Vec<Customer>, String> {
    get_json("/api/customers").await
}

pub async fn fetch_by_id(id: &str) -> Result<Customer, String> {
    get_json(&format!("/api/customers/{}", id)).await
}

pub async fn save(dto: &CustomerDto) -> Result<String, String> {
    let result: serde_json::Value = post_json("/api/customers", dto).await?;
    id_from_upsert(&result).ok_or_else(|| "Server did not return an id".to_string())
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/customers/{}", id)).await
}
