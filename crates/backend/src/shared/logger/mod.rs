pub mod repository;

use contracts::shared::logger::SOURCE_SERVER;
use repository::log_event_internal;

/// Record a server event in the monitoring log
///
/// ```ignore
/// logger::log("startup", "Server started");
/// ```
pub fn log(category: &str, message: &str) {
    tracing::debug!(target: "system_log", "[{}] {}", category, message);
    log_event_internal(SOURCE_SERVER, category, message);
}
