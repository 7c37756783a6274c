use serde::{Deserialize, Serialize};

pub const SOURCE_CLIENT: &str = "client";
pub const SOURCE_SERVER: &str = "server";

/// Monitoring log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub source: String, // "client" or "server"
    pub category: String,
    pub message: String,
}

/// Body of `POST /api/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,
    pub category: String,
    pub message: String,
}

/// Filters of `GET /api/logs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    crate::shared::list::DEFAULT_PAGE_SIZE
}

impl LogListQuery {
    pub fn page_request(&self) -> crate::shared::list::PageRequest {
        crate::shared::list::PageRequest::new(self.page, self.page_size)
    }
}

/// Categories written by the application itself
pub mod category {
    pub const AUTH: &str = "auth";
    pub const VIEW_SWITCH: &str = "view_switch";
    pub const RESERVATION: &str = "reservation";
    pub const STARTUP: &str = "startup";
}
