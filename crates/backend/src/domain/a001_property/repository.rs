use chrono::Utc;
use contracts::domain::a001_property::aggregate::{Property, PropertyId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_property")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub customer_id: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub timezone: String,
    pub currency: String,
    pub star_rating: Option<i32>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Property {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::nil());

        Property {
            base: BaseAggregate::with_metadata(
                PropertyId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            customer_id: m.customer_id,
            address: m.address,
            city: m.city,
            country: m.country,
            timezone: m.timezone,
            currency: m.currency,
            star_rating: m.star_rating,
        }
    }
}

fn to_active(aggregate: &Property) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        customer_id: Set(aggregate.customer_id.clone()),
        address: Set(aggregate.address.clone()),
        city: Set(aggregate.city.clone()),
        country: Set(aggregate.country.clone()),
        timezone: Set(aggregate.timezone.clone()),
        currency: Set(aggregate.currency.clone()),
        star_rating: Set(aggregate.star_rating),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Property>> {
    let mut items: Vec<Property> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Property>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_code(code: &str) -> anyhow::Result<Option<Property>> {
    let result = Entity::find()
        .filter(Column::Code.eq(code))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// All rows including deleted ones, used to number new codes
pub async fn count_all() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Property) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Property) -> anyhow::Result<()> {
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

pub async fn count_by_customer(customer_id: &str) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::CustomerId.eq(customer_id))
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?)
}
