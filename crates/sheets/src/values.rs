//! Tipos da API `spreadsheets.values`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Como a API deve interpretar os valores escritos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueInputOption {
    /// Valor gravado literalmente
    Raw,
    /// Valor interpretado como se digitado pelo usuário (datas, números)
    UserEntered,
}

/// Um intervalo e seus valores (para escrita)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub range: String,
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Intervalo de uma célula só
    pub fn single(range: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            values: vec![vec![value.into()]],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest<'a> {
    pub value_input_option: ValueInputOption,
    pub data: &'a [ValueRange],
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateResponse {
    pub spreadsheet_id: Option<String>,
    pub total_updated_cells: Option<u64>,
    pub error: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRangeResponse {
    pub range: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
    pub error: Option<Value>,
}

impl ValueRangeResponse {
    /// Grade de células como texto
    pub fn into_grid(self) -> Vec<Vec<String>> {
        self.values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect()
    }
}

/// Converte uma célula JSON em texto (`null` vira vazio)
pub fn cell_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Extrai a mensagem de um objeto `error` da API do Google
pub(crate) fn error_message(error: &Value) -> Option<String> {
    error
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .or_else(|| error.as_str().map(str::to_string))
}
