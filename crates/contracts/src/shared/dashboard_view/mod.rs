//! Dashboard views and route ownership
//!
//! - `view.rs`: the two dashboard contexts
//! - `resolver.rs`: ordered section table, path -> view
//! - `switch.rs`: what to do when navigation crosses into the other view

pub mod resolver;
pub mod switch;
pub mod view;

pub use resolver::{resolve_view, RoutePattern, RoutePatternTable, RouteTableError, ROUTE_TABLE};
pub use switch::{plan_view_switch, switch_message, ViewSwitch, ROOT_PATH};
pub use view::DashboardView;
