//! Router assembly.

mod common;
mod resources;

pub use common::{common_routes, not_found};
pub use resources::resource_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Full application: resource and common routes behind body-limit and tracing layers.
/// The limit is enforced when a body is extracted, so oversized requests get the JSON error envelope.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(resource_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
