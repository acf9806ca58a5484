//! Cliente HTTP para o feed de atividades do RD Station CRM

use crate::activities::{ActivitiesPage, Activity};
use crate::error::{RdStationError, Result};
use reqwest::{Client as HttpClient, Response, Url};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://crm.rdstation.com/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 200;

/// Leitor paginado de `/activities`
///
/// O token é um segredo do servidor: vai apenas na query string da
/// requisição e nunca aparece em logs.
#[derive(Clone)]
pub struct ActivityFeedClient {
    http_client: HttpClient,
    token: String,
    base_url: String,
    page_size: u32,
}

impl ActivityFeedClient {
    /// Cria um cliente apontando para a API pública do RD Station CRM
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE)
    }

    /// Cria um cliente com URL base e tamanho de página customizados
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
        page_size: u32,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| RdStationError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size: page_size.max(1),
        })
    }

    /// Busca uma única página (1-based)
    pub async fn fetch_page(&self, page: u32) -> Result<ActivitiesPage> {
        let page_param = page.to_string();
        let limit_param = self.page_size.to_string();
        let url = Url::parse_with_params(
            &format!("{}/activities", self.base_url),
            &[
                ("token", self.token.as_str()),
                ("page", page_param.as_str()),
                ("limit", limit_param.as_str()),
            ],
        )
        .map_err(|e| RdStationError::ConfigError(format!("Invalid feed URL: {}", e)))?;

        tracing::debug!(
            "GET {}/activities?token=[REDACTED]&page={}&limit={}",
            self.base_url,
            page,
            self.page_size
        );

        let response = self.http_client.get(url).send().await?;
        let response = self.handle_response(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Lê o feed inteiro, página por página, preservando a ordem do feed.
    ///
    /// Para quando `has_more` é falso ou quando uma página vem vazia (mesmo
    /// que `has_more` diga o contrário). Qualquer erro descarta o que já foi
    /// lido.
    pub async fn fetch_all_activities(&self) -> Result<Vec<Activity>> {
        let mut all = Vec::new();
        let mut page = 1u32;

        loop {
            let batch = self.fetch_page(page).await?;
            let count = batch.activities.len();

            tracing::info!(
                "📄 Página {} do feed de atividades: {} registros (has_more={})",
                page,
                count,
                batch.has_more
            );

            all.extend(batch.activities);

            if !batch.has_more || count == 0 {
                break;
            }
            page += 1;
        }

        tracing::info!("📥 Feed de atividades lido: {} registros em {} página(s)", all.len(), page);
        Ok(all)
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        tracing::error!("RD Station CRM API error ({}): {}", status_code, error_body);

        let message = serde_json::from_str::<Value>(&error_body)
            .ok()
            .and_then(|json| {
                ["message", "error", "errors"]
                    .iter()
                    .find_map(|key| json.get(*key).and_then(|v| v.as_str()).map(str::to_string))
            })
            .unwrap_or(error_body);

        Err(RdStationError::ApiError {
            status: status_code,
            message,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}
