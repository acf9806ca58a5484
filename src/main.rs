//! Servidor HTTP do job de sincronização de anotações
//!
//! - POST /api/sync-anotacoes: lê o feed do CRM e atualiza a planilha
//! - GET /health e /status: verificação do serviço

use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crm_anotacoes_sync::{build_router, config::Settings, utils::logging::*, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    if settings.crm.token().is_none() {
        log_warning("⚠️  RD_CRM_TOKEN não configurado: toda sincronização vai responder 500");
    }

    // No Cloud Run, PORT tem prioridade
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(settings.server.port);
    let host = settings.server.host.clone();

    let state = AppState::from_settings(settings).context("Failed to initialize services")?;
    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind(format!("{}:{}", host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;

    log_server_startup(port);
    log_server_ready(port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info("🛑 Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_warning(&format!("Falha ao instalar handler de Ctrl+C: {}", e));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log_warning(&format!("Falha ao instalar handler de SIGTERM: {}", e));
                std::future::pending::<()>().await;
            }
        }
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
