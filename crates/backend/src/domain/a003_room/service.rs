use super::repository;
use crate::domain::{a001_property, a004_reservation};
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a003_room::aggregate::{Room, RoomDto, RoomListQuery};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

async fn check_references(aggregate: &Room) -> ServiceResult<()> {
    let property_id = Uuid::parse_str(&aggregate.property_id)
        .map_err(|_| ServiceError::validation("Invalid property id"))?;
    if a001_property::repository::get_by_id(property_id).await?.is_none() {
        return Err(ServiceError::validation("Property does not exist"));
    }

    if let Some(other) =
        repository::get_by_number(&aggregate.property_id, &aggregate.base.code).await?
    {
        if other.base.id != aggregate.base.id {
            return Err(ServiceError::Conflict(format!(
                "Room {} already exists in this property",
                aggregate.base.code
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: RoomDto) -> ServiceResult<Uuid> {
    let mut aggregate = Room::new_for_insert(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;

    aggregate.before_write();
    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: RoomDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Room::element_name()))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(())
}

/// Soft delete. Rooms with upcoming or current stays cannot be deleted.
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let today = chrono::Local::now().date_naive();
    let booked = a004_reservation::repository::list_active_for_room(&id.to_string())
        .await?
        .into_iter()
        .any(|r| r.check_out > today);
    if booked {
        return Err(ServiceError::Conflict(
            "Room has current or upcoming reservations".into(),
        ));
    }
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::not_found(Room::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Room>> {
    repository::get_by_id(id).await
}

pub async fn list(query: &RoomListQuery) -> anyhow::Result<Vec<Room>> {
    repository::list(query).await
}
