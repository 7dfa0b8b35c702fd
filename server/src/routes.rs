//! HTTP routes

pub mod api;
pub mod ui;

use axum::Router;

use crate::state::AppState;

/// Create main router with all routes
pub fn app(state: AppState) -> Router {
    Router::new()
        // REST API routes
        .nest("/api/v1", api::routes())
        // Pages, form actions and static assets
        .merge(ui::ui_routes(&state.config))
        .with_state(state)
}
