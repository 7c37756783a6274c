use axum::{extract::Query, http::StatusCode, Json};
use contracts::shared::list::ListResponse;
use contracts::shared::logger::{CreateLogRequest, LogEntry, LogListQuery};
use serde_json::json;

use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::logger;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/logs?source=&category=&page=&page_size=
pub async fn list(Query(query): Query<LogListQuery>) -> ServiceResult<Json<ListResponse<LogEntry>>> {
    Ok(Json(logger::repository::list_paginated(&query).await?))
}

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> ServiceResult<StatusCode> {
    if req.category.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ServiceError::validation("Category and message are required"));
    }
    logger::repository::log_event(&req.source, &req.category, &req.message).await?;
    Ok(StatusCode::OK)
}

/// DELETE /api/logs (admin only)
pub async fn clear_all(user: CurrentUser) -> ServiceResult<Json<serde_json::Value>> {
    user.require_admin()?;
    let deleted = logger::repository::clear_all_logs().await?;
    tracing::info!("{} cleared {} log entries", user.0.username, deleted);
    Ok(Json(json!({ "deleted": deleted })))
}
