use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};
use serde_json::json;

use crate::domain::a002_customer;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};

// Mounted behind require_admin

/// GET /api/customers
pub async fn list_all() -> ServiceResult<Json<Vec<Customer>>> {
    Ok(Json(a002_customer::service::list_all().await?))
}

/// GET /api/customers/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Customer>> {
    a002_customer::service::get_by_id(parse_id(&id)?)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("Customer"))
}

/// POST /api/customers
pub async fn upsert(Json(dto): Json<CustomerDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = match dto.id.clone() {
        Some(id) => {
            a002_customer::service::update(dto).await?;
            id
        }
        None => a002_customer::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/customers/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    a002_customer::service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}
