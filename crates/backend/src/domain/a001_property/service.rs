use super::repository;
use crate::domain::{a002_customer, a003_room};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::format::sequence_code;
use crate::shared::logger;
use contracts::domain::a001_property::aggregate::{Property, PropertyDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

async fn check_references(aggregate: &Property) -> ServiceResult<()> {
    if let Some(customer_id) = &aggregate.customer_id {
        let id = Uuid::parse_str(customer_id)
            .map_err(|_| ServiceError::validation("Invalid customer id"))?;
        if a002_customer::repository::get_by_id(id).await?.is_none() {
            return Err(ServiceError::validation("Customer does not exist"));
        }
    }
    Ok(())
}

async fn check_code_is_free(aggregate: &Property) -> ServiceResult<()> {
    if let Some(other) = repository::get_by_code(&aggregate.base.code).await? {
        if other.base.id != aggregate.base.id {
            return Err(ServiceError::Conflict(format!(
                "Property code {} is already used",
                aggregate.base.code
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: PropertyDto) -> ServiceResult<Uuid> {
    let mut aggregate = Property::new_for_insert(&dto);
    if aggregate.base.code.is_empty() {
        aggregate.base.code = sequence_code("PRP", repository::count_all().await? + 1);
    }

    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    logger::log(
        Property::collection_name(),
        &format!("Property {} created", aggregate.base.code),
    );
    Ok(id)
}

pub async fn update(dto: PropertyDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Property::element_name()))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    check_references(&aggregate).await?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(())
}

/// Soft delete. A property with rooms cannot be deleted.
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let rooms = a003_room::repository::count_by_property(&id.to_string()).await?;
    if rooms > 0 {
        return Err(ServiceError::Conflict(format!(
            "Property still has {} room(s)",
            rooms
        )));
    }
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::not_found(Property::element_name()));
    }
    logger::log(Property::collection_name(), &format!("Property {} deleted", id));
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Property>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Property>> {
    repository::list_all().await
}
