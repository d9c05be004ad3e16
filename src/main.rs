//! This project is split in 2 main modules:
//!
//! - [pages] (payment-return landing screens)
//! - [mask] (identifier masking for logged redirect parameters)
#![doc = include_str!("../README.md")]

use std::net::{Ipv4Addr, SocketAddrV4};

use axum::Router;
use tracing_subscriber::EnvFilter;

/// Identifier masking for logged redirect parameters
mod mask;
/// Payment-return landing screens
///
/// This module defines the query model and routes for the screens the payment
/// provider redirects the customer back to after checkout.
mod pages;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };
    let state = state::AppState::from_env();

    let app = Router::new()
        .merge(pages::api::router())
        .fallback(pages::api::not_found)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3030);

    let listener = tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port))
        .await
        .unwrap();

    tracing::info!("Serving on port {port}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();
}
