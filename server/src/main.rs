mod config;
mod routes;

use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let proxy = routes::proxy::ProxyState::new(&config.api_upstream, config.proxy_timeout)
        .expect("failed to build API proxy client");
    let app = routes::app(proxy).expect("failed to build router");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.api_upstream, "flagscan listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
