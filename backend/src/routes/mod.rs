//! Route definitions for the FarmArea backend

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - everything else is scoped to the current user
        .merge(protected_routes(state))
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
}

/// User-scoped routes (protected)
///
/// The auth middleware verifies tokens with the secret held in `state`,
/// the same one the auth service signs with.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Profile and farm settings
        .route(
            "/user",
            get(handlers::get_user).patch(handlers::update_user),
        )
        .route(
            "/farm-settings",
            get(handlers::get_farm_settings).patch(handlers::update_farm_settings),
        )
        // Areas
        .route(
            "/areas",
            get(handlers::list_areas).post(handlers::create_area),
        )
        .route(
            "/areas/:id",
            get(handlers::get_area)
                .patch(handlers::update_area)
                .delete(handlers::delete_area),
        )
        // Tasks, nested under their area for list/create
        .route(
            "/areas/:area_id/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            patch(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/tasks/:id/status", post(handlers::transition_task_status))
        // Notes, nested under their area for list/create
        .route(
            "/areas/:area_id/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/:id", delete(handlers::delete_note))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
