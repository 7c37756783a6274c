use super::repository;
use crate::domain::a001_property;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::format::sequence_code;
use crate::shared::logger;
use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

async fn check_code_is_free(aggregate: &Customer) -> ServiceResult<()> {
    match repository::get_by_code(&aggregate.base.code).await? {
        Some(other) if other.base.id != aggregate.base.id => Err(ServiceError::Conflict(
            format!("Customer code {} is already used", aggregate.base.code),
        )),
        _ => Ok(()),
    }
}

pub async fn create(dto: CustomerDto) -> ServiceResult<Uuid> {
    let mut aggregate = Customer::new_for_insert(&dto);
    if aggregate.base.code.is_empty() {
        aggregate.base.code = sequence_code("CUS", repository::count_all().await? + 1);
    }

    aggregate.validate().map_err(ServiceError::Validation)?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    let id = repository::insert(&aggregate).await?;
    logger::log(
        Customer::collection_name(),
        &format!("Customer {} created", aggregate.base.code),
    );
    Ok(id)
}

pub async fn update(dto: CustomerDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::validation("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(Customer::element_name()))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    check_code_is_free(&aggregate).await?;

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(())
}

/// Soft delete. A customer that still owns properties cannot be deleted.
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let properties = a001_property::repository::count_by_customer(&id.to_string()).await?;
    if properties > 0 {
        return Err(ServiceError::Conflict(format!(
            "Customer still owns {} propert{}",
            properties,
            if properties == 1 { "y" } else { "ies" }
        )));
    }
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::not_found(Customer::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Customer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    repository::list_all().await
}
