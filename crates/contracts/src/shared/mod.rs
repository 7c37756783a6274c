pub mod dashboard_view;
pub mod list;
pub mod logger;
