use contracts::domain::a003_room::aggregate::{Room, RoomDto, RoomListQuery};

use crate::shared::api_utils::{delete, get_json, id_from_upsert, post_json, with_query};

pub async fn fetch_list(query: &RoomListQuery) -> Result<Vec<Room>, String> {
    get_json(&with_query("/api/rooms", query)?).await
}

pub async fn fetch_by_id(id: &str) -> Result<Room, String> {
    get_json(&format!("/api/rooms/{}", id)).await
}

pub async fn save(dto: &RoomDto) -> Result<String, String> {
    let result: serde_json::Value = post_json("/api/rooms", dto).await?;
    id_from_upsert(&result).ok_or_else(|| "Server did not return an id".to_string())
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/rooms/{}", id)).await
}
