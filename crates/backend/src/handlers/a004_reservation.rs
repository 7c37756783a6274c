use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a004_reservation::aggregate::{
    Reservation, ReservationDto, ReservationListQuery, StatusChangeRequest,
};
use contracts::shared::list::ListResponse;
use serde_json::json;

use crate::domain::a004_reservation;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};

/// GET /api/reservations?property_id=&status=&search=&page=&page_size=
pub async fn list(
    Query(query): Query<ReservationListQuery>,
) -> ServiceResult<Json<ListResponse<Reservation>>> {
    Ok(Json(a004_reservation::service::list(&query).await?))
}

/// GET /api/reservations/:id
pub async fn get_by_id(Path(id): Path<String>) -> ServiceResult<Json<Reservation>> {
    a004_reservation::service::get_by_id(parse_id(&id)?)
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::not_found("Reservation"))
}

/// POST /api/reservations
pub async fn upsert(Json(dto): Json<ReservationDto>) -> ServiceResult<Json<serde_json::Value>> {
    let id = match dto.id.clone() {
        Some(id) => {
            a004_reservation::service::update(dto).await?;
            id
        }
        None => a004_reservation::service::create(dto).await?.to_string(),
    };
    Ok(Json(json!({ "id": id })))
}

/// POST /api/reservations/:id/status
pub async fn change_status(
    Path(id): Path<String>,
    Json(req): Json<StatusChangeRequest>,
) -> ServiceResult<Json<Reservation>> {
    let reservation = a004_reservation::service::change_status(parse_id(&id)?, req.status).await?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    a004_reservation::service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::OK)
}
