use chrono::Utc;
use contracts::shared::list::{ListResponse, PageRequest};
use contracts::shared::logger::{LogEntry, LogListQuery};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "system_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub timestamp: String,
    pub source: String,
    pub category: String,
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LogEntry {
    fn from(m: Model) -> Self {
        LogEntry {
            id: m.id,
            timestamp: m.timestamp,
            source: m.source,
            category: m.category,
            message: m.message,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Fire-and-forget insert
pub fn log_event_internal(source: &str, category: &str, message: &str) {
    let source = source.to_string();
    let category = category.to_string();
    let message = message.to_string();

    tokio::spawn(async move {
        if let Err(e) = log_event(&source, &category, &message).await {
            tracing::warn!("Failed to log event: {}", e);
        }
    });
}

pub async fn log_event(source: &str, category: &str, message: &str) -> anyhow::Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();

    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        timestamp: Set(now),
        source: Set(source.to_string()),
        category: Set(category.to_string()),
        message: Set(message.to_string()),
    };

    active.insert(conn()).await?;
    Ok(())
}

fn filtered(query: &LogListQuery) -> Select<Entity> {
    let mut select = Entity::find();
    if let Some(source) = query.source.as_ref().filter(|s| !s.is_empty()) {
        select = select.filter(Column::Source.eq(source.as_str()));
    }
    if let Some(category) = query.category.as_ref().filter(|c| !c.is_empty()) {
        select = select.filter(Column::Category.eq(category.as_str()));
    }
    select
}

/// Page of log records, newest first
pub async fn list_paginated(query: &LogListQuery) -> anyhow::Result<ListResponse<LogEntry>> {
    let page: PageRequest = query.page_request();
    let paginator = filtered(query)
        .order_by_desc(Column::Id)
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

pub async fn clear_all_logs() -> anyhow::Result<u64> {
    let result = Entity::delete_many().exec(conn()).await?;
    Ok(result.rows_affected)
}
