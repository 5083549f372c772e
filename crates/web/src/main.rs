use competitor_intel_core::adapters::config::app_config::AppConfig;
use competitor_intel_core::application::context::AppContext;
use competitor_intel_core::prettyprint::prettyprint::PrettyFormatter;
use error_stack::ResultExt;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod error;
mod handlers;
mod navigation;
mod render;
mod routes;

#[derive(Error, Debug)]
enum StartupError {
    #[error("Could not load configuration")]
    Config,
    #[error("Could not set up the Google clients")]
    Context,
    #[error("Could not listen on {0}")]
    Bind(String),
    #[error("Server stopped unexpectedly")]
    Serve,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing()?;
    setup_panic_hook();

    info!("Starting competitor-intel dashboard");

    match run().await {
        Ok(()) => {
            info!("Dashboard stopped");
            Ok(())
        }
        Err(report) => {
            error!("Dashboard failed: {:?}", report);
            Err(report.current_context().to_string().into())
        }
    }
}

async fn run() -> error_stack::Result<(), StartupError> {
    let config = AppConfig::load().change_context(StartupError::Config)?;

    let ctx = AppContext::connect(&config)
        .await
        .change_context(StartupError::Context)?;
    info!(
        "Spreadsheet: {}, library folder: {}",
        if ctx.sheet_id.is_empty() { "unset" } else { ctx.sheet_id.as_str() },
        if ctx.drive_top_folder_id.is_empty() {
            "unset"
        } else {
            ctx.drive_top_folder_id.as_str()
        }
    );

    let bind = config.server.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .change_context_lazy(|| StartupError::Bind(bind.clone()))?;
    info!("Dashboard listening on http://{}", bind);

    axum::serve(listener, routes::build_router(Arc::new(ctx)))
        .await
        .change_context(StartupError::Serve)
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(Mutex::new(std::fs::File::create("competitor_intel.log")?))
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("competitor_intel_web", tracing::Level::TRACE)
                .with_target("competitor_intel_core", tracing::Level::TRACE)
                .with_target("tower_http", tracing::Level::DEBUG),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
