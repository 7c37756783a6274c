use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::system::auth::middleware::{require_admin, require_auth};
use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(auth_routes())
        .merge(user_admin_routes())
        .merge(customer_routes())
        .merge(business_routes())
}

/// Login flow, public except `/me`
fn auth_routes() -> Router {
    Router::new()
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(middleware::from_fn(require_auth)),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password)
                .layer(middleware::from_fn(require_auth)),
        )
}

fn user_admin_routes() -> Router {
    Router::new()
        .route(
            "/api/system/users",
            get(system::handlers::users::list).post(system::handlers::users::create),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete),
        )
        .route_layer(middleware::from_fn(require_admin))
}

// A002 Customer: the whole aggregate is admin-owned
fn customer_routes() -> Router {
    Router::new()
        .route(
            "/api/customers",
            get(handlers::a002_customer::list_all).post(handlers::a002_customer::upsert),
        )
        .route(
            "/api/customers/:id",
            get(handlers::a002_customer::get_by_id).delete(handlers::a002_customer::delete),
        )
        .route_layer(middleware::from_fn(require_admin))
}

fn business_routes() -> Router {
    Router::new()
        // A001 Property
        .route(
            "/api/properties",
            get(handlers::a001_property::list_all).post(handlers::a001_property::upsert),
        )
        .route(
            "/api/properties/:id",
            get(handlers::a001_property::get_by_id).delete(handlers::a001_property::delete),
        )
        // A003 Room
        .route(
            "/api/rooms",
            get(handlers::a003_room::list).post(handlers::a003_room::upsert),
        )
        .route(
            "/api/rooms/:id",
            get(handlers::a003_room::get_by_id).delete(handlers::a003_room::delete),
        )
        // A004 Reservation
        .route(
            "/api/reservations",
            get(handlers::a004_reservation::list).post(handlers::a004_reservation::upsert),
        )
        .route(
            "/api/reservations/:id",
            get(handlers::a004_reservation::get_by_id).delete(handlers::a004_reservation::delete),
        )
        .route(
            "/api/reservations/:id/status",
            post(handlers::a004_reservation::change_status),
        )
        // D400 Front desk
        .route(
            "/api/dashboard/front-desk",
            get(handlers::d400_front_desk::get_front_desk),
        )
        // Monitoring log
        .route(
            "/api/logs",
            get(handlers::logs::list)
                .post(handlers::logs::create)
                .delete(handlers::logs::clear_all),
        )
        .route_layer(middleware::from_fn(require_auth))
}
