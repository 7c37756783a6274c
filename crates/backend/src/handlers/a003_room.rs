use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_room::aggregate::{Room, RoomDto, RoomListQuery};
use serde_json::json;

use crate::domain::a003_room;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};

/// GET /api/rooms?property_id=&status=
pub async fn list(Query(query): Query<RoomListQuery>) -> ServiceResult<Json<Vec<Room>>> {
    Ok(Json(a003_room::service::list(&query).await?))
}

/// GET /api/rooms/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Room>> {
    a003_room::service::get_by_id(parse_id(&id)?)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("Room"))
}

/// POST /api/rooms
pub async fn upsert(Json(dto): Json<RoomDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = match dto.id.clone() {
        Some(id) => {
            a003_room::service::update(dto).await?;
            id
        }
        None => a003_room::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/rooms/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    a003_room::service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}
