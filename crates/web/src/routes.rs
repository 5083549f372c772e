use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, SharedContext};
use crate::navigation::Page;

pub fn build_router(ctx: SharedContext) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            Page::Competitors.path(),
            get(handlers::competitors).post(handlers::submit_competitor),
        )
        .route(Page::Library.path(), get(handlers::library))
        .route(Page::Automations.path(), get(handlers::automations))
        .route(Page::Reports.path(), get(handlers::reports))
        .with_state(ctx)
        .layer(TraceLayer::new_for_http())
}
