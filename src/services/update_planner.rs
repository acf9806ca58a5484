//! Calcula as escritas pontuais necessárias na planilha

use sheets::a1::cell_ref;
use sheets::ValueRange;

use super::annotations::AnnotationMap;
use super::sheet_header::RequiredColumns;
use crate::utils::repair_mojibake;

/// Uma escrita em uma única célula
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub range: String,
    pub value: String,
}

impl From<CellUpdate> for ValueRange {
    fn from(update: CellUpdate) -> Self {
        ValueRange::single(update.range, update.value)
    }
}

/// Resultado do planejamento
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    pub updates: Vec<CellUpdate>,
    /// Linhas com deal_id que tinham anotação
    pub matched_rows: usize,
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Percorre as linhas de dados (sem o cabeçalho) e gera as escritas.
///
/// Linha `i` do slice é a linha `i + 2` da planilha. Linhas sem deal_id ou
/// cujo deal_id não tem anotação não geram nada.
pub fn plan_updates(
    data_rows: &[Vec<String>],
    columns: &RequiredColumns,
    annotations: &AnnotationMap,
    sheet_name: Option<&str>,
) -> UpdatePlan {
    let mut plan = UpdatePlan::default();

    for (idx, row) in data_rows.iter().enumerate() {
        let row_number = idx + 2;
        let deal_id = cell(row, columns.deal_id).trim();

        if deal_id.is_empty() {
            continue;
        }
        let Some(annotation) = annotations.get(deal_id) else {
            continue;
        };

        plan.matched_rows += 1;
        plan.updates.push(CellUpdate {
            range: cell_ref(sheet_name, columns.follow_up + 1, row_number),
            value: annotation.occurred_at.clone(),
        });

        if let Some(text_col) = columns.follow_up_anotacao {
            if !annotation.text.is_empty() {
                plan.updates.push(CellUpdate {
                    range: cell_ref(sheet_name, text_col + 1, row_number),
                    value: repair_mojibake(Some(&annotation.text)),
                });
            }
        }
    }

    plan
}
