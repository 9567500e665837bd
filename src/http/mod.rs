//! HTTP surface.
//!
//! Routes:
//! - `GET /categories?skip=&take=`: one page of the category listing
//! - `GET /health`: liveness probe

mod handlers;
mod middleware;

use axum::middleware as axum_middleware;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;

use crate::context::Context;

pub use handlers::{health, list_categories, Health, PageQuery};
pub use middleware::log_requests;

/// Build the application router over the given context.
pub fn router(ctx: Context) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().layer(axum_middleware::from_fn(log_requests)))
        .with_state(ctx)
}
