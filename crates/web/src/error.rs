use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use competitor_intel_core::application::{context::AppContext, pages::PageError};
use error_stack::Report;
use tracing::error;

use crate::navigation::Page;
use crate::render::{self, Sidebar};

/// A page that failed to render. Shown as a 500 with the error chain.
pub struct WebError {
    page: Page,
    sidebar: Sidebar,
    report: Report<PageError>,
}

impl WebError {
    pub fn new(page: Page, ctx: &AppContext, report: Report<PageError>) -> Self {
        Self {
            page,
            sidebar: Sidebar::from_context(ctx),
            report,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("{} page failed: {:?}", self.page, self.report);
        let body = render::pages::error(&self.page.to_string(), &format!("{:#}", self.report));
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(render::layout(self.page, &self.sidebar, &body)),
        )
            .into_response()
    }
}
