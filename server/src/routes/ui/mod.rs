//! UI routes module - server-rendered pages

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Router,
};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::state::AppState;
use crate::templates::NotFoundTemplate;

// Sub-modules
pub mod payment;

/// Create UI router with all page and form routes
pub fn ui_routes(config: &Config) -> Router<AppState> {
    Router::new()
        // Payment confirmation
        .merge(payment::routes())
        // Static files
        .nest_service("/static", ServeDir::new(&config.static_dir))
        // 404 handler
        .fallback(not_found)
}

/// 404 handler
async fn not_found(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let template = NotFoundTemplate {
        home_url: state.config.destinations.home.clone(),
    };
    Ok((StatusCode::NOT_FOUND, Html(template.render()?)))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Custom error type for UI routes
#[derive(Debug)]
pub enum AppError {
    TemplateError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Template error: {}", msg))
            }
        };

        (status, message).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use receipt_core::{Destinations, SystemClock};
    use tower::ServiceExt;

    use crate::{config::Config, routes, state::AppState};

    fn app() -> axum::Router {
        let config = Config {
            destinations: Destinations {
                home: "/welcome".to_string(),
                ..Default::default()
            },
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        };
        routes::app(AppState::with_clock(config, Arc::new(SystemClock)))
    }

    #[tokio::test]
    async fn test_not_found_page() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("404 - Page Not Found"));
        assert!(body.contains("welcome"));
    }

    #[tokio::test]
    async fn test_serves_stylesheet() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/static/css/receipt.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
    }
}
