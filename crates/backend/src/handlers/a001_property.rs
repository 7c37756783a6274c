use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_property::aggregate::{Property, PropertyDto};
use serde_json::json;

use crate::domain::a001_property;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/properties
pub async fn list_all() -> ServiceResult<Json<Vec<Property>>> {
    Ok(Json(a001_property::service::list_all().await?))
}

/// GET /api/properties/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Property>> {
    let uuid = parse_id(&id)?;
    a001_property::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("Property"))
}

/// POST /api/properties (admin only)
pub async fn upsert(
    user: CurrentUser,
    Json(dto): Json<PropertyDto>,
) -> ServiceResult<Json<serde_json::Value>> {
    user.require_admin()?;
    let id = match dto.id.clone() {
        Some(id) => {
            a001_property::service::update(dto).await?;
            id
        }
        None => a001_property::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/properties/:id (admin only)
pub async fn delete(user: CurrentUser, Path(id): Path<String>) -> ServiceResult<StatusCode> {
    user.require_admin()?;
    a001_property::service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}
