//! Job `sync-anotacoes`: feed do CRM -> anotação mais recente -> planilha
//!
//! Fluxo linear, uma passada por execução:
//! 1. lê todas as páginas do feed de atividades
//! 2. reduz para a anotação mais recente por deal_id
//! 3. lê a planilha inteira
//! 4. localiza as colunas pelo cabeçalho e planeja as escritas
//! 5. aplica tudo em um único batchUpdate
//!
//! Nada fica em memória entre execuções.

use rdstation::ActivityFeedClient;
use sheets::a1::qualified_range;
use sheets::{SheetsClient, ValueInputOption, ValueRange};
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use super::annotations::reduce_latest;
use super::sheet_header::resolve_columns;
use super::update_planner::plan_updates;
use crate::models::{SyncOutcome, SyncParams};
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

pub const DEFAULT_READ_RANGE: &str = "A1:ZZ";

#[derive(Clone)]
pub struct SyncJob {
    feed: ActivityFeedClient,
    sheets: SheetsClient,
    read_range: String,
}

impl SyncJob {
    pub fn new(feed: ActivityFeedClient, sheets: SheetsClient) -> Self {
        Self {
            feed,
            sheets,
            read_range: DEFAULT_READ_RANGE.to_string(),
        }
    }

    pub fn with_read_range(mut self, read_range: impl Into<String>) -> Self {
        self.read_range = read_range.into();
        self
    }

    /// Executa uma sincronização completa
    pub async fn run(&self, params: &SyncParams) -> AppResult<SyncOutcome> {
        let span = tracing::info_span!(
            "sync_anotacoes",
            run_id = %Uuid::new_v4(),
            spreadsheet_id = %params.spreadsheet_id
        );
        self.run_steps(params).instrument(span).await
    }

    async fn run_steps(&self, params: &SyncParams) -> AppResult<SyncOutcome> {
        let started = Instant::now();
        let sheet_name = params.sheet_name.as_deref();
        log_sync_started(&params.spreadsheet_id, sheet_name);

        let activities = self.feed.fetch_all_activities().await.map_err(|e| {
            log_crm_api_error(e.status(), &e.to_string());
            AppError::from(e)
        })?;

        let annotations = reduce_latest(&activities);
        log_annotations_reduced(activities.len(), annotations.len());

        if annotations.is_empty() {
            return Ok(SyncOutcome::no_annotations());
        }

        let range = qualified_range(sheet_name, &self.read_range);
        let grid = self
            .sheets
            .read_range(&params.spreadsheet_id, &range, &params.access_token)
            .await
            .map_err(|e| {
                log_sheets_api_error("read_range", &e.to_string());
                AppError::SheetsRead(e.user_message())
            })?;

        let Some((header, data_rows)) = grid.split_first() else {
            return Ok(SyncOutcome::empty_sheet());
        };
        if data_rows.is_empty() {
            return Ok(SyncOutcome::empty_sheet());
        }
        log_sheet_loaded(data_rows.len());

        let columns = resolve_columns(header).require()?;
        log_columns_resolved(columns.deal_id, columns.follow_up, columns.follow_up_anotacao);

        let plan = plan_updates(data_rows, &columns, &annotations, sheet_name);
        log_updates_planned(plan.updates.len(), plan.matched_rows);

        if plan.updates.is_empty() {
            return Ok(SyncOutcome::no_matches());
        }

        let count = plan.updates.len();
        let matched_rows = plan.matched_rows;
        let data: Vec<ValueRange> = plan.updates.into_iter().map(ValueRange::from).collect();

        self.sheets
            .batch_update(
                &params.spreadsheet_id,
                &data,
                ValueInputOption::UserEntered,
                &params.access_token,
            )
            .await
            .map_err(|e| {
                log_sheets_api_error("batch_update", &e.to_string());
                AppError::SheetsWrite(e.user_message())
            })?;

        log_sync_finished(count, started.elapsed().as_millis() as u64);
        Ok(SyncOutcome::updated(count, matched_rows))
    }
}
