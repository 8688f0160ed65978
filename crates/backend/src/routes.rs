use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers;

/// All routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Personnel roster
        .route("/api/personnel", get(handlers::personnel::list_all))
        .route("/api/personnel/:id", put(handlers::personnel::update))
        // Schedules and build shells
        .route("/api/schedules", get(handlers::schedule::list_schedules))
        .route("/api/flying_shell", get(handlers::schedule::flying_shell))
        .route("/api/duty_shell", get(handlers::schedule::duty_shell))
}
