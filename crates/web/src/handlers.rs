use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
};
use competitor_intel_core::application::{context::AppContext, pages::automations as automations_page};
use competitor_intel_core::domain::competitor::CompetitorForm;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use crate::error::WebError;
use crate::navigation::Page;
use crate::render::{self, Sidebar};

pub type SharedContext = Arc<AppContext>;

#[derive(Debug, Default, Deserialize)]
pub struct CompetitorsQuery {
    #[serde(default)]
    pub saved: bool,
}

fn page(page: Page, ctx: &AppContext, body: &str) -> Html<String> {
    Html(render::layout(page, &Sidebar::from_context(ctx), body))
}

pub async fn index() -> Redirect {
    Redirect::to(Page::Competitors.path())
}

#[instrument(skip(ctx))]
pub async fn competitors(
    State(ctx): State<SharedContext>,
    Query(query): Query<CompetitorsQuery>,
) -> Result<Html<String>, WebError> {
    let view = ctx
        .competitors()
        .load()
        .await
        .map_err(|report| WebError::new(Page::Competitors, &ctx, report))?;

    Ok(page(
        Page::Competitors,
        &ctx,
        &render::pages::competitors(&view, query.saved),
    ))
}

#[instrument(skip(ctx))]
pub async fn submit_competitor(
    State(ctx): State<SharedContext>,
    Form(form): Form<CompetitorForm>,
) -> Result<Redirect, WebError> {
    ctx.competitors()
        .submit(form)
        .await
        .map_err(|report| WebError::new(Page::Competitors, &ctx, report))?;

    Ok(Redirect::to("/competitors?saved=true"))
}

#[instrument(skip(ctx))]
pub async fn library(State(ctx): State<SharedContext>) -> Result<Html<String>, WebError> {
    let view = ctx
        .library()
        .load()
        .await
        .map_err(|report| WebError::new(Page::Library, &ctx, report))?;

    Ok(page(Page::Library, &ctx, &render::pages::library(&view)))
}

pub async fn automations(State(ctx): State<SharedContext>) -> Html<String> {
    page(
        Page::Automations,
        &ctx,
        &render::pages::automations(automations_page::load()),
    )
}

#[instrument(skip(ctx))]
pub async fn reports(State(ctx): State<SharedContext>) -> Html<String> {
    let view = ctx.reports().load().await;
    page(Page::Reports, &ctx, &render::pages::reports(&view))
}
