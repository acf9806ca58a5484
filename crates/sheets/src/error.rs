//! Tipos de erro para o crate sheets

use thiserror::Error;

/// Erros do cliente do Google Sheets
#[derive(Debug, Error)]
pub enum SheetsError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro devolvido pela API (status não-2xx ou objeto `error` no corpo)
    #[error("Google Sheets API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SheetsError {
    /// Mensagem para o usuário final (sem o prefixo técnico)
    pub fn user_message(&self) -> String {
        match self {
            SheetsError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, SheetsError>;
