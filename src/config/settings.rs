use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub crm: CrmSettings,
    pub sheets: SheetsSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CrmSettings {
    pub token: Option<String>,  // Segredo do servidor; ausente => todo POST responde 500
    pub base_url: String,
    pub page_size: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SheetsSettings {
    pub base_url: String,
    pub read_range: String,  // Intervalo lido por execução (sem prefixo de aba)
}

impl CrmSettings {
    /// Token do CRM, se configurado e não vazio
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("crm.base_url", rdstation::DEFAULT_BASE_URL)?
            .set_default("crm.page_size", i64::from(rdstation::DEFAULT_PAGE_SIZE))?
            .set_default("sheets.base_url", sheets::DEFAULT_BASE_URL)?
            .set_default("sheets.read_range", "A1:ZZ")?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("CRM_SYNC").separator("__"));

        // Variáveis de ambiente específicas têm a palavra final
        if let Ok(token) = std::env::var("RD_CRM_TOKEN") {
            builder = builder.set_override("crm.token", token)?;
        }
        if let Ok(base_url) = std::env::var("RD_CRM_BASE_URL") {
            builder = builder.set_override("crm.base_url", base_url)?;
        }
        if let Ok(page_size) = std::env::var("RD_PAGE_SIZE") {
            builder = builder.set_override("crm.page_size", page_size)?;
        }
        if let Ok(base_url) = std::env::var("SHEETS_BASE_URL") {
            builder = builder.set_override("sheets.base_url", base_url)?;
        }

        builder.build()?.try_deserialize()
    }
}
