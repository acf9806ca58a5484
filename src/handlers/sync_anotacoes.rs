use axum::{
    extract::{rejection::JsonRejection, State},
    http::Method,
    response::Json,
};
use std::sync::Arc;
use tokio::time::Instant;

use crate::models::{SyncRequest, SyncResponse};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};
use crate::AppState;

pub const SYNC_ENDPOINT: &str = "/api/sync-anotacoes";

/// POST /api/sync-anotacoes
///
/// Corpo: `{ accessToken, spreadsheetId, sheetName? }`. O `accessToken` é o
/// bearer do Google de quem chama; o token do CRM fica no servidor.
pub async fn sync_anotacoes(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SyncRequest>, JsonRejection>,
) -> AppResult<Json<SyncResponse>> {
    let start_time = Instant::now();
    log_request_received(SYNC_ENDPOINT, "POST");

    let job = state.job.as_ref().ok_or_else(|| {
        AppError::ConfigError(
            "Token do RD Station CRM não configurado no servidor (RD_CRM_TOKEN).".to_string(),
        )
    })?;

    let Json(request) = payload.map_err(|rejection| {
        log_validation_error("body", &rejection.body_text());
        AppError::ValidationError(format!("Corpo da requisição inválido: {}", rejection.body_text()))
    })?;

    let params = request.validate().map_err(|e| {
        log_validation_error("body", &e.to_string());
        e
    })?;

    let outcome = job.run(&params).await?;

    log_request_processed(SYNC_ENDPOINT, 200, start_time.elapsed().as_millis() as u64);
    Ok(Json(outcome.into()))
}

/// Qualquer método diferente de POST no endpoint do job
pub async fn method_not_allowed(method: Method) -> AppError {
    log_validation_error("method", method.as_str());
    AppError::MethodNotAllowed(method.to_string())
}
