//! Payment success page routes
//!
//! Endpoints:
//! - GET  /payment/success: confirmation page, or redirect to the listing
//!   when the query string carries no transaction id
//! - POST /payment/success/continue: "Go to My Courses"
//! - POST /payment/success/browse: "Go To Home"

use askama::Template;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use receipt_core::{Destination, Location, PendingNavigation, ViewController};
use tracing::{debug, info, instrument};

use super::AppError;
use crate::{state::AppState, templates::PaymentSuccessTemplate};

pub const SUCCESS_PATH: &str = "/payment/success";
pub const CONTINUE_PATH: &str = "/payment/success/continue";
pub const BROWSE_PATH: &str = "/payment/success/browse";

/// Create payment router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(SUCCESS_PATH, get(success_page))
        .route(CONTINUE_PATH, post(continue_to_dashboard))
        .route(BROWSE_PATH, post(browse_home))
}

/// Success page handler
#[instrument(skip_all)]
async fn success_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let location = Location::parse(query.as_deref());
    let mut pending = PendingNavigation::new();

    let summary = {
        let mut controller = ViewController::new(&mut pending);
        let summary = controller.render(&location, state.clock.today());
        controller.run_effects(&summary);
        summary
    };

    if let Some(response) = follow(&state, &pending) {
        return Ok(response);
    }

    info!(
        transaction_id = %summary.transaction_id_display(),
        "Rendering payment success page"
    );
    let template = PaymentSuccessTemplate::new(&summary);
    Ok(Html(template.render()?).into_response())
}

/// "Go to My Courses" handler
#[instrument(skip_all)]
async fn continue_to_dashboard(State(state): State<AppState>) -> Response {
    run_action(&state, |controller| controller.continue_to_dashboard())
}

/// "Go To Home" handler
#[instrument(skip_all)]
async fn browse_home(State(state): State<AppState>) -> Response {
    run_action(&state, |controller| controller.browse_home())
}

fn run_action<F>(state: &AppState, action: F) -> Response
where
    F: FnOnce(&mut ViewController<&mut PendingNavigation>),
{
    let mut pending = PendingNavigation::new();
    action(&mut ViewController::new(&mut pending));

    follow(state, &pending).unwrap_or_else(|| StatusCode::NO_CONTENT.into_response())
}

/// Turn a pending navigation into a redirect response
fn follow(state: &AppState, pending: &PendingNavigation) -> Option<Response> {
    let target = pending.target()?;
    Some(redirect_to(state, target))
}

fn redirect_to(state: &AppState, target: Destination) -> Response {
    let url = state.config.destinations.url_for(target);
    debug!(destination = %target, url, "Redirecting");
    Redirect::to(url).into_response()
}
