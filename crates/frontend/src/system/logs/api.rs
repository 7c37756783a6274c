use contracts::shared::list::ListResponse;
use contracts::shared::logger::{CreateLogRequest, LogEntry, LogListQuery, SOURCE_CLIENT};

use crate::shared::api_utils::{delete, get_json, post_empty, with_query};

pub async fn fetch_logs(query: &LogListQuery) -> Result<ListResponse<LogEntry>, String> {
    get_json(&with_query("/api/logs", query)?).await
}

/// Record a client-side event in the monitoring log
pub async fn post_client_event(category: &str, message: &str) -> Result<(), String> {
    let request = CreateLogRequest {
        source: SOURCE_CLIENT.to_string(),
        category: category.to_string(),
        message: message.to_string(),
    };
    post_empty("/api/logs", &request).await
}

pub async fn clear_logs() -> Result<(), String> {
    delete("/api/logs").await
}
