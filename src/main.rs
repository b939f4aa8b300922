#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{config::RuntimeConfiguration, routes::router, state::ApiState};
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod data;
mod error;
mod routes;
mod state;

async fn shutdown_signal(state: ApiState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
    state.sensible_shutdown().await;
}

#[tokio::main]
async fn main() {
    // a missing .env is fine, the function host sets real env vars
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            panic!("unable to load env vars: {e}");
        }
    }

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let state = ApiState::new(&config)
        .await
        .expect("unable to create state");

    let server_config = config.server();
    let app = router(state.clone(), server_config.route_prefix());

    let server_ip = server_config.bind_address();
    let listener = TcpListener::bind(server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, route_prefix = ?server_config.route_prefix(), "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .expect("unable to serve app");
}
