// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitcoach API Server
//!
//! Serves the session, directory and helper endpoints used by the mobile
//! client. All state is in memory and lost on restart.

use fitcoach::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        seed_demo_data = config.seed_demo_data,
        "Starting Fitcoach API"
    );

    let state = Arc::new(AppState::new(config.clone()));
    {
        let directory = state.directory.read().await;
        tracing::info!(
            users = directory.users().len(),
            trainers = directory.trainers().len(),
            reminders = directory.reminders().len(),
            "Directory loaded"
        );
    }

    let app = fitcoach::routes::create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitcoach=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .try_init()?;
    Ok(())
}
