use core_geo::common::config::AppConfig;
use core_geo::common::tls_config::{load_tls_config, tls_paths};
use core_geo::{DEFAULT_LOG_SETTINGS, get_api_base_url, setup_logging};

use api_geo::{AppState, routes};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging(DEFAULT_LOG_SETTINGS);

    let config = AppConfig::from_env().expect("Invalid configuration");
    let state = AppState::from_config(config).expect("Failed to load sites or site profile");
    let app = routes::router().with_state(state);

    let addr = get_api_base_url().expect("Invalid HOST or PORT");

    match tls_paths() {
        Some((cert_path, key_path)) => {
            // rustls needs a process-wide crypto provider before any config is built
            let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
            let tls_config = load_tls_config(cert_path, key_path)
                .await
                .expect("Failed to load TLS certificate and key");

            tracing::info!("Listening on https://{}", addr);
            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service())
                .await
                .expect("Server error");
        }
        None => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .unwrap_or_else(|e| panic!("Failed to bind to address {}: {}", addr, e));

            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await.expect("Server error");
        }
    }
}
