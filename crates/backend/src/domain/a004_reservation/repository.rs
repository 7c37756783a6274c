use chrono::{NaiveDate, Utc};
use contracts::domain::a004_reservation::aggregate::{
    Reservation, ReservationId, ReservationListQuery,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::ReservationStatus;
use contracts::shared::list::ListResponse;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_reservation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub property_id: String,
    pub room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub status: String,
    pub total_amount: f64,
    pub currency: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::nil());

        Reservation {
            base: BaseAggregate::with_metadata(
                ReservationId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            property_id: m.property_id,
            room_id: m.room_id,
            guest_name: m.guest_name,
            guest_email: m.guest_email,
            guest_phone: m.guest_phone,
            check_in: m.check_in,
            check_out: m.check_out,
            adults: m.adults,
            children: m.children,
            status: ReservationStatus::from_code(&m.status).unwrap_or_default(),
            total_amount: m.total_amount,
            currency: m.currency,
        }
    }
}

fn to_active(aggregate: &Reservation) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        property_id: Set(aggregate.property_id.clone()),
        room_id: Set(aggregate.room_id.clone()),
        guest_name: Set(aggregate.guest_name.clone()),
        guest_email: Set(aggregate.guest_email.clone()),
        guest_phone: Set(aggregate.guest_phone.clone()),
        check_in: Set(aggregate.check_in),
        check_out: Set(aggregate.check_out),
        adults: Set(aggregate.adults),
        children: Set(aggregate.children),
        status: Set(aggregate.status.code().to_string()),
        total_amount: Set(aggregate.total_amount),
        currency: Set(aggregate.currency.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn inactive_codes() -> Vec<&'static str> {
    ReservationStatus::all()
        .into_iter()
        .filter(|s| !s.is_active())
        .map(|s| s.code())
        .collect()
}

/// Filtered page, latest arrivals first
pub async fn list_paginated(
    query: &ReservationListQuery,
) -> anyhow::Result<ListResponse<Reservation>> {
    let page = query.page_request();
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(property_id) = query.property_id.as_ref().filter(|p| !p.is_empty()) {
        select = select.filter(Column::PropertyId.eq(property_id.as_str()));
    }
    if let Some(status) = query.status {
        select = select.filter(Column::Status.eq(status.code()));
    }
    if let Some(search) = query.search.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        select = select.filter(
            Condition::any()
                .add(Column::Code.contains(search))
                .add(Column::GuestName.contains(search))
                .add(Column::GuestEmail.contains(&search.to_lowercase())),
        );
    }

    let paginator = select
        .order_by_desc(Column::CheckIn)
        .order_by_asc(Column::Code)
        .paginate(conn(), page.page_size);
    let total = paginator.num_items().await?;
    let items = paginator
        .fetch_page(page.page)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(ListResponse::new(items, total, page))
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Reservation>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<Reservation>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Codes starting with `prefix`, deleted rows included
pub async fn codes_with_prefix(prefix: &str) -> anyhow::Result<Vec<String>> {
    let items = Entity::find()
        .filter(Column::Code.starts_with(prefix))
        .all(conn())
        .await?;
    Ok(items.into_iter().map(|m| m.code).collect())
}

/// Reservations still holding `room_id`
pub async fn list_active_for_room(room_id: &str) -> anyhow::Result<Vec<Reservation>> {
    let items = Entity::find()
        .filter(Column::RoomId.eq(room_id))
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Status.is_not_in(inactive_codes()))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Reservations not yet departed on `date` (check_out >= date)
pub async fn list_from_date(
    property_id: Option<&str>,
    date: NaiveDate,
) -> anyhow::Result<Vec<Reservation>> {
    let mut select = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::CheckOut.gte(date));
    if let Some(property_id) = property_id {
        select = select.filter(Column::PropertyId.eq(property_id));
    }
    let items = select
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// All rows including deleted ones, used to number new codes
pub async fn count_all() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Reservation) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Reservation) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
