//! Cliente HTTP para a API de valores do Google Sheets

use crate::error::{Result, SheetsError};
use crate::values::{
    error_message, BatchUpdateRequest, BatchUpdateResponse, ValueInputOption, ValueRange,
    ValueRangeResponse,
};
use reqwest::{Client as HttpClient, Response};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";

/// Cliente da API `spreadsheets.values`
///
/// Não guarda credenciais: o bearer token pertence a quem chamou o job e
/// é passado em cada operação.
#[derive(Clone)]
pub struct SheetsClient {
    http_client: HttpClient,
    base_url: String,
}

impl SheetsClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| SheetsError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL de leitura de um intervalo (id e intervalo percent-encoded)
    pub fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    fn batch_update_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values:batchUpdate",
            self.base_url,
            urlencoding::encode(spreadsheet_id)
        )
    }

    /// Lê um intervalo e devolve a grade de células como texto.
    /// Intervalo sem dados devolve grade vazia.
    pub async fn read_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        access_token: &str,
    ) -> Result<Vec<Vec<String>>> {
        let url = self.values_url(spreadsheet_id, range);

        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let body = self.handle_response(response).await?.text().await?;
        let parsed: ValueRangeResponse = serde_json::from_str(&body)?;

        if let Some(error) = &parsed.error {
            return Err(SheetsError::ApiError {
                status: 200,
                message: error_message(error).unwrap_or_else(|| error.to_string()),
            });
        }

        Ok(parsed.into_grid())
    }

    /// Aplica todas as escritas em uma única chamada `values:batchUpdate`.
    ///
    /// Devolve `totalUpdatedCells` quando a API informa.
    pub async fn batch_update(
        &self,
        spreadsheet_id: &str,
        data: &[ValueRange],
        value_input_option: ValueInputOption,
        access_token: &str,
    ) -> Result<Option<u64>> {
        let url = self.batch_update_url(spreadsheet_id);
        let request = BatchUpdateRequest {
            value_input_option,
            data,
        };

        tracing::debug!("POST {} with {} range(s)", url, data.len());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;

        let body = self.handle_response(response).await?.text().await?;
        let parsed: BatchUpdateResponse = if body.trim().is_empty() {
            BatchUpdateResponse::default()
        } else {
            serde_json::from_str(&body)?
        };

        if let Some(error) = &parsed.error {
            return Err(SheetsError::ApiError {
                status: 200,
                message: error_message(error).unwrap_or_else(|| error.to_string()),
            });
        }

        Ok(parsed.total_updated_cells)
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("Google Sheets API error ({}): {}", status_code, error_body);

        let message = serde_json::from_str::<Value>(&error_body)
            .ok()
            .and_then(|json| json.get("error").and_then(error_message))
            .unwrap_or(error_body);

        Err(SheetsError::ApiError {
            status: status_code,
            message,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
