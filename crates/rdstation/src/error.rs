//! Tipos de erro para o crate rdstation

use thiserror::Error;

/// Erros do cliente do RD Station CRM
#[derive(Debug, Error)]
pub enum RdStationError {
    /// Erro de requisição HTTP (transporte, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Resposta não-2xx do feed
    #[error("RD Station CRM API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Corpo da resposta não pôde ser interpretado
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Erro de configuração do cliente
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl RdStationError {
    /// Status HTTP devolvido pelo CRM, quando o erro veio de uma resposta
    pub fn status(&self) -> Option<u16> {
        match self {
            RdStationError::ApiError { status, .. } => Some(*status),
            RdStationError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, RdStationError>;
