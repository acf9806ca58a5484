use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::logging::*;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    log_health_check();

    Json(json!({
        "status": "healthy",
        "service": "crm-anotacoes-sync",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Resumo da configuração (nunca expõe segredos)
pub async fn status_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    log_health_check();

    let crm = &state.settings.crm;

    Json(json!({
        "service": "crm-anotacoes-sync",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        "ready": state.job.is_some(),
        "integrations": {
            "crm": {
                "token_configured": crm.token().is_some(),
                "base_url": crm.base_url,
                "page_size": crm.page_size
            },
            "sheets": {
                "base_url": state.settings.sheets.base_url,
                "read_range": state.settings.sheets.read_range
            }
        }
    }))
}
