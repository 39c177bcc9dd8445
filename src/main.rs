use action_counter::{WINDOW_SECS, build_router, config::Args, state::AppState, telemetry};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let args = Args::parse();

    let state = Arc::new(AppState::new());
    let app = build_router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, window_secs = WINDOW_SECS, "action counter listening");
    axum::serve(listener, app).await?;
    Ok(())
}
