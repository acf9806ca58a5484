//! Contrato HTTP do job `sync-anotacoes`

use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

/// Corpo do POST como chega (todos os campos opcionais para poder nomear
/// exatamente o que falta)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    pub access_token: Option<String>,
    pub spreadsheet_id: Option<String>,
    pub sheet_name: Option<String>,
}

/// Parâmetros validados de uma execução
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncParams {
    pub access_token: String,
    pub spreadsheet_id: String,
    pub sheet_name: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl SyncRequest {
    /// Valida os obrigatórios, listando todos os ausentes de uma vez
    pub fn validate(&self) -> AppResult<SyncParams> {
        let access_token = non_blank(&self.access_token);
        let spreadsheet_id = non_blank(&self.spreadsheet_id);

        let mut missing = Vec::new();
        if access_token.is_none() {
            missing.push("accessToken");
        }
        if spreadsheet_id.is_none() {
            missing.push("spreadsheetId");
        }

        match (access_token, spreadsheet_id) {
            (Some(access_token), Some(spreadsheet_id)) => Ok(SyncParams {
                access_token,
                spreadsheet_id,
                sheet_name: non_blank(&self.sheet_name),
            }),
            _ => Err(AppError::ValidationError(format!(
                "Parâmetro(s) obrigatório(s) ausente(s): {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Como a execução terminou (todas são sucesso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// O feed não trouxe nenhuma anotação utilizável
    NoAnnotations,
    /// Planilha sem linhas de dados
    EmptySheet,
    /// Nenhum deal_id da planilha tem anotação
    NoMatches,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub status: SyncStatus,
    /// Escritas de célula emitidas (data e texto contam separadamente)
    pub updates: usize,
    pub message: String,
}

impl SyncOutcome {
    pub fn no_annotations() -> Self {
        Self {
            status: SyncStatus::NoAnnotations,
            updates: 0,
            message: "Nenhuma anotação encontrada no CRM. Nada para atualizar.".to_string(),
        }
    }

    pub fn empty_sheet() -> Self {
        Self {
            status: SyncStatus::EmptySheet,
            updates: 0,
            message: "A planilha está vazia (sem linhas de dados). Nada para atualizar.".to_string(),
        }
    }

    pub fn no_matches() -> Self {
        Self {
            status: SyncStatus::NoMatches,
            updates: 0,
            message: "Nenhuma linha da planilha corresponde a negociações com anotações.".to_string(),
        }
    }

    pub fn updated(updates: usize, deals: usize) -> Self {
        Self {
            status: SyncStatus::Updated,
            updates,
            message: format!(
                "Planilha atualizada: {} célula(s) em {} negociação(ões).",
                updates, deals
            ),
        }
    }
}

/// Resposta de sucesso
#[derive(Debug, Clone, Serialize)]
pub struct SyncResponse {
    pub ok: bool,
    pub message: String,
    #[serde(rename = "dealsAtualizados")]
    pub deals_atualizados: usize,
}

impl From<SyncOutcome> for SyncResponse {
    fn from(outcome: SyncOutcome) -> Self {
        Self {
            ok: true,
            message: outcome.message,
            deals_atualizados: outcome.updates,
        }
    }
}
