use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

pub const WRITE_SCOPE_HINT: &str =
    "Verifique se o token tem permissão de escrita na planilha (escopo https://www.googleapis.com/auth/spreadsheets).";

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    ValidationError(String),
    MissingColumn(String),
    SheetsRead(String),
    SheetsWrite(String),
    CrmApi { status: Option<u16>, message: String },
    MethodNotAllowed(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::MissingColumn(col) => write!(f, "Missing sheet column: {}", col),
            AppError::SheetsRead(msg) => write!(f, "Sheets read error: {}", msg),
            AppError::SheetsWrite(msg) => write!(f, "Sheets write error: {}", msg),
            AppError::CrmApi { status, message } => {
                write!(f, "CRM API error (status {:?}): {}", status, message)
            }
            AppError::MethodNotAllowed(method) => write!(f, "Method not allowed: {}", method),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<rdstation::RdStationError> for AppError {
    fn from(err: rdstation::RdStationError) -> Self {
        let status = err.status();
        let message = match err {
            rdstation::RdStationError::ApiError { message, .. } => message,
            other => other.to_string(),
        };
        AppError::CrmApi { status, message }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MissingColumn(_) => StatusCode::BAD_REQUEST,
            AppError::SheetsRead(_) => StatusCode::BAD_REQUEST,
            AppError::SheetsWrite(_) => StatusCode::BAD_REQUEST,
            AppError::CrmApi { .. } => StatusCode::BAD_GATEWAY,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Rótulo curto (`error`) e texto para o usuário final (`message`)
    fn label_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::ConfigError(msg) => ("Configuração do servidor incompleta", msg.clone()),
            AppError::ValidationError(msg) => ("Parâmetros inválidos", msg.clone()),
            AppError::MissingColumn(col) => (
                "Coluna não encontrada",
                format!(
                    "A planilha não tem a coluna '{}' no cabeçalho (linha 1). Confira o nome da coluna.",
                    col
                ),
            ),
            AppError::SheetsRead(msg) => ("Erro ao ler a planilha", msg.clone()),
            AppError::SheetsWrite(msg) => (
                "Erro ao atualizar a planilha",
                format!("{} {}", msg, WRITE_SCOPE_HINT),
            ),
            AppError::CrmApi { message, .. } => ("Erro ao buscar atividades no CRM", message.clone()),
            AppError::MethodNotAllowed(method) => (
                "Método não permitido",
                format!("Use POST para sincronizar anotações (recebido: {}).", method),
            ),
            AppError::InternalError(_) => (
                "Erro interno",
                "Erro inesperado ao sincronizar anotações. Tente novamente.".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Detalhes internos ficam só no log
        if let AppError::InternalError(detail) = &self {
            tracing::error!("❌ Erro interno: {}", detail);
        }

        let (error, message) = self.label_and_message();
        let body = json!({
            "error": error,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::ConfigError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::ValidationError("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingColumn("deal_id".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::CrmApi { status: Some(401), message: "x".into() }.status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(AppError::MethodNotAllowed("GET".into()).status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(AppError::InternalError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let (_, message) = AppError::InternalError("panic at src/foo.rs:12".into()).label_and_message();
        assert!(!message.contains("src/foo.rs"));
    }

    #[test]
    fn test_write_error_carries_permission_hint() {
        let (_, message) = AppError::SheetsWrite("insufficient scopes.".into()).label_and_message();
        assert!(message.starts_with("insufficient scopes."));
        assert!(message.contains("permissão de escrita"));
    }

    #[test]
    fn test_from_rdstation_error_keeps_upstream_message() {
        let err: AppError = rdstation::RdStationError::ApiError {
            status: 401,
            message: "Token inválido".into(),
        }
        .into();

        match err {
            AppError::CrmApi { status, message } => {
                assert_eq!(status, Some(401));
                assert_eq!(message, "Token inválido");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
