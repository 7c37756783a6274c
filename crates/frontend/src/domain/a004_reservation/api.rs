use contracts::domain::a004_reservation::aggregate::{
    Reservation, ReservationDto, ReservationListQuery, StatusChangeRequest,
};
use contracts::enums::ReservationStatus;
use contracts::shared::list::ListResponse;

use crate::shared::api_utils::{delete, get_json, id_from_upsert, post_json, with_query};

pub async fn fetch_page(query: &ReservationListQuery) -> Result<ListResponse<Reservation>, String> {
    get_json(&with_query("/api/reservations", query)?).await
}

pub async fn fetch_by_id(id: &str) -> Result<Reservation, String> {
    get_json(&format!("/api/reservations/{}", id)).await
}

pub async fn save(dto: &ReservationDto) -> Result<String, String> {
    let result: serde_json::Value = post_json("/api/reservations", dto).await?;
    id_from_upsert(&result).ok_or_else(|| "Server did not return an id".to_string())
}

/// Move the reservation along its lifecycle, returns the updated record
pub async fn change_status(id: &str, status: ReservationStatus) -> Result<Reservation, String> {
    post_json(
        &format!("/api/reservations/{}/status", id),
        &StatusChangeRequest { status },
    )
    .await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/reservations/{}", id)).await
}
