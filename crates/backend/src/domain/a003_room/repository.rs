use chrono::Utc;
use contracts::domain::a003_room::aggregate::{Room, RoomId, RoomListQuery};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{RoomStatus, RoomType};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_room")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub property_id: String,
    pub room_type: String,
    pub floor: i32,
    pub capacity: i32,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Room {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::nil());

        Room {
            base: BaseAggregate::with_metadata(
                RoomId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            property_id: m.property_id,
            room_type: RoomType::from_code(&m.room_type).unwrap_or_default(),
            floor: m.floor,
            capacity: m.capacity,
            status: RoomStatus::from_code(&m.status).unwrap_or_default(),
        }
    }
}

fn to_active(aggregate: &Room) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        property_id: Set(aggregate.property_id.clone()),
        room_type: Set(aggregate.room_type.code().to_string()),
        floor: Set(aggregate.floor),
        capacity: Set(aggregate.capacity),
        status: Set(aggregate.status.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Rooms ordered by floor and number
pub async fn list(query: &RoomListQuery) -> anyhow::Result<Vec<Room>> {
    let mut select = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(property_id) = query.property_id.as_ref().filter(|p| !p.is_empty()) {
        select = select.filter(Column::PropertyId.eq(property_id.as_str()));
    }
    if let Some(status) = query.status {
        select = select.filter(Column::Status.eq(status.code()));
    }
    let items = select
        .order_by_asc(Column::Floor)
        .order_by_asc(Column::Code)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Room>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Room numbers are unique within a property
pub async fn get_by_number(property_id: &str, code: &str) -> anyhow::Result<Option<Room>> {
    let result = Entity::find()
        .filter(Column::PropertyId.eq(property_id))
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count_by_property(property_id: &str) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::PropertyId.eq(property_id))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?)
}

pub async fn insert(aggregate: &Room) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Room) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn set_status(id: &str, status: RoomStatus) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::Status, Expr::value(status.code()))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .col_expr(Column::Version, Expr::col(Column::Version).add(1))
        .filter(Column::Id.eq(id))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
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
