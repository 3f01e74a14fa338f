use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use hubspot_crm_gateway::{build_router, config::Settings, utils::logging::*, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar .env antes do subscriber, para que RUST_LOG possa vir dele
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if dotenv_loaded {
        tracing::info!("✅ Arquivo .env carregado com sucesso");
    } else {
        tracing::debug!("Arquivo .env não encontrado - usando variáveis de ambiente do sistema");
    }

    let settings = Settings::new().context("Failed to load settings")?;
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    let state = AppState::from_settings(settings.clone()).context("Failed to initialize HubSpot clients")?;

    if settings.uses_static_token() {
        log_info("🔑 CRM usando token estático (private app)");
    } else {
        log_info("🔑 CRM usando o token OAuth de cada requisição (Authorization: Bearer)");
    }

    if state.oauth.is_some() {
        log_info("✅ OAuth2 endpoints enabled: /auth/hubspot, /auth/hubspot/callback");
    } else {
        log_warning("⚠️  OAuth2 endpoints disabled (missing HUBSPOT_CLIENT_ID or HUBSPOT_CLIENT_SECRET)");
    }

    let app = build_router(Arc::new(state));

    // PORT tem precedência (Cloud Run e afins)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let listener = TcpListener::bind(format!("{}:{}", settings.server.host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", settings.server.host, port))?;

    log_server_startup(port);
    log_server_ready(&settings.server.host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

/// Signal handler para graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            log_info("🛑 Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            log_info("🛑 Received SIGTERM, shutting down gracefully...");
        }
    }
}
