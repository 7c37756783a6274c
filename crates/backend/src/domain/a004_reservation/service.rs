use super::repository;
use crate::domain::{a001_property, a003_room};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::format::sequence_code;
use crate::shared::logger;
use contracts::domain::a003_room::aggregate::Room;
use contracts::domain::a004_reservation::aggregate::{
    Reservation, ReservationDto, ReservationListQuery,
};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{ReservationStatus, RoomStatus};
use contracts::shared::list::ListResponse;
use contracts::shared::logger::category;
use std::collections::HashSet;
use uuid::Uuid;

/// First existing reservation that blocks `candidate`'s room
pub fn find_conflict<'a>(
    candidate: &Reservation,
    existing: &'a [Reservation],
) -> Option<&'a Reservation> {
    existing.iter().find(|other| candidate.overlaps(other))
}

/// Room assignment rules, independent of storage
pub fn check_room(reservation: &Reservation, room: &Room) -> ServiceResult<()> {
    if room.property_id != reservation.property_id {
        return Err(ServiceError::validation(
            "Room belongs to a different property",
        ));
    }
    if !room.fits(reservation.guests()) {
        return Err(ServiceError::validation(format!(
            "Room {} sleeps at most {} guest(s)",
            room.base.code, room.capacity
        )));
    }
    if room.status == RoomStatus::OutOfService {
        return Err(ServiceError::validation(format!(
            "Room {} is out of service",
            room.base.code
        )));
    }
    Ok(())
}

async fn check_references(aggregate: &Reservation) -> ServiceResult<()> {
    let property_id = Uuid::parse_str(&aggregate.property_id)
        .map_err(|_| ServiceError::validation("Invalid property id"))?;
    if a001_property::repository::get_by_id(property_id).await?.is_none() {
        return Err(ServiceError::validation("Property does not exist"));
    }

    let Some(room_id) = &aggregate.room_id else {
        return Ok(());
    };
    let room_uuid =
        Uuid::parse_str(room_id).map_err(|_| ServiceError::validation("Invalid room id"))?;
    let room = a003_room::repository::get_by_id(room_uuid)
        .await?
        .ok_or_else(|| ServiceError::validation("Room does not exist"))?;
    check_room(aggregate, &room)?;

    let existing = repository::list_active_for_room(room_id).await?;
    if let Some(other) = find_conflict(aggregate, &existing) {
        return Err(ServiceError::Conflict(format!(
            "Room {} is already booked by {} ({} to {})",
            room.base.code, other.base.code, other.check_in, other.check_out
        )));
    }
    Ok(())
}

/// First sequence code from `start` on that is not in `taken`
pub fn next_free_code(prefix: &str, start: u64, taken: &HashSet<String>) -> String {
    (start..)
        .map(|n| sequence_code(prefix, n))
        .find(|code| !taken.contains(code))
        .unwrap_or_else(|| sequence_code(prefix, start))
}

async fn generate_code() -> ServiceResult<String> {
    const PREFIX: &str = "RES";
    let taken: HashSet<String> = repository::codes_with_prefix(PREFIX)
        .await?
        .into_iter()
        .collect();
    let start = repository::count_all().await? + 1;
    Ok(next_free_code(PREFIX, start, &taken))
}

async fn check_code_is_free(aggregate: &Reservation) -> ServiceResult<()> {
    match repository::get_by_code(&aggregate.base.code).await? {
        Some(other) if other.base.id != aggregate.base.id => Err(ServiceError::Conflict(
            format!("Confirmation number {} is already used", aggregate.base.code),
        )),
        _ => Ok(()),
    }
}

pub async fn create(dto: ReservationDto) -> ServiceResult<Uuid> {
    let mut aggregate = Reservation::new_for_insert(&dto);
    if aggregate.base.code.is_empty() {
        aggregate.base.code = generate_code().await?;
    }

    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    logger::log(
        category::RESERVATION,
        &format!(
            "Reservation {} created for {} ({} night(s))",
            aggregate.base.code,
            aggregate.guest_name,
            aggregate.nights()
        ),
    );
    Ok(id)
}

pub async fn update(dto: ReservationDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Reservation::element_name()))?;
    if aggregate.status.is_terminal() {
        return Err(ServiceError::Conflict(format!(
            "{} reservations cannot be edited",
            aggregate.status.display_name()
        )));
    }

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(())
}

/// Room housekeeping state after a stay transition
fn room_status_after(status: ReservationStatus) -> Option<RoomStatus> {
    match status {
        ReservationStatus::CheckedIn => Some(RoomStatus::Occupied),
        ReservationStatus::CheckedOut => Some(RoomStatus::Cleaning),
        _ => None,
    }
}

/// Move a reservation along its lifecycle, updating the room state
pub async fn change_status(id: Uuid, next: ReservationStatus) -> ServiceResult<Reservation> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Reservation::element_name()))?;

    if next == ReservationStatus::CheckedIn && aggregate.room_id.is_none() {
        return Err(ServiceError::validation(
            "Assign a room before checking the guest in",
        ));
    }
    let previous = aggregate.status;
    aggregate
        .change_status(next)
        .map_err(ServiceError::Conflict)?;
    if previous == next {
        return Ok(aggregate);
    }

    aggregate.before_write();
    repository::update(&aggregate).await?;

    if let (Some(room_id), Some(room_status)) = (&aggregate.room_id, room_status_after(next)) {
        if !a003_room::repository::set_status(room_id, room_status).await? {
            tracing::warn!(
                "Reservation {} refers to missing room {}",
                aggregate.base.code,
                room_id
            );
        }
    }

    logger::log(
        category::RESERVATION,
        &format!(
            "Reservation {}: {} -> {}",
            aggregate.base.code,
            previous.display_name(),
            next.display_name()
        ),
    );
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::not_found(Reservation::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Reservation>> {
    repository::get_by_id(id).await
}

pub async fn list(query: &ReservationListQuery) -> anyhow::Result<ListResponse<Reservation>> {
    repository::list_paginated(query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_room::aggregate::RoomDto;

    fn reservation(room: &str, check_in: &str, check_out: &str) -> Reservation {
        let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d").unwrap();
        let mut dto = ReservationDto::new_for(check_in);
        dto.check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d").unwrap();
        dto.property_id = "p1".into();
        dto.room_id = Some(room.into());
        dto.guest_name = "Grace Hopper".into();
        dto.adults = 2;
        Reservation::new_for_insert(&dto)
    }

    fn room(capacity: i32) -> Room {
        Room::new_for_insert(&RoomDto {
            code: Some("101".into()),
            property_id: "p1".into(),
            capacity,
            ..Default::default()
        })
    }

    #[test]
    fn test_next_free_code_skips_taken_codes() {
        let taken: HashSet<String> = ["RES-004", "RES-005", "RES-007"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(next_free_code("RES", 4, &taken), "RES-006");
        assert_eq!(next_free_code("RES", 7, &taken), "RES-008");
        assert_eq!(next_free_code("RES", 1, &HashSet::new()), "RES-001");
    }

    #[test]
    fn test_find_conflict() {
        let existing = vec![
            reservation("r1", "2025-05-01", "2025-05-04"),
            reservation("r2", "2025-05-02", "2025-05-03"),
        ];
        let candidate = reservation("r1", "2025-05-03", "2025-05-05");
        let conflict = find_conflict(&candidate, &existing).unwrap();
        assert_eq!(conflict.base.id, existing[0].base.id);

        let after = reservation("r1", "2025-05-04", "2025-05-06");
        assert!(find_conflict(&after, &existing).is_none());
    }

    #[test]
    fn test_check_room() {
        let r = reservation("r1", "2025-05-01", "2025-05-02");
        assert!(check_room(&r, &room(2)).is_ok());
        assert!(matches!(
            check_room(&r, &room(1)),
            Err(ServiceError::Validation(_))
        ));

        let mut closed = room(2);
        closed.status = RoomStatus::OutOfService;
        assert!(check_room(&r, &closed).is_err());

        let mut elsewhere = room(2);
        elsewhere.property_id = "p2".into();
        assert!(check_room(&r, &elsewhere).is_err());
    }

    #[test]
    fn test_room_status_after() {
        assert_eq!(
            room_status_after(ReservationStatus::CheckedIn),
            Some(RoomStatus::Occupied)
        );
        assert_eq!(
            room_status_after(ReservationStatus::CheckedOut),
            Some(RoomStatus::Cleaning)
        );
        assert_eq!(room_status_after(ReservationStatus::Cancelled), None);
    }
}
