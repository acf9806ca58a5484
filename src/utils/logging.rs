use tracing::{info, warn, error, debug};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_sync_started(spreadsheet_id: &str, sheet_name: Option<&str>) {
    info!("🔄 Sincronizando anotações -> planilha {} (aba: {})",
          spreadsheet_id, sheet_name.unwrap_or("<padrão>"));
}

pub fn log_annotations_reduced(records: usize, deals: usize) {
    info!("🧮 {} atividades reduzidas para {} negociações com anotação", records, deals);
}

pub fn log_sheet_loaded(rows: usize) {
    info!("📊 Planilha lida: {} linhas de dados", rows);
}

pub fn log_columns_resolved(deal_id: usize, follow_up: usize, follow_up_anotacao: Option<usize>) {
    debug!("Colunas: deal_id={} follow_up={} follow_up_anotacao={:?}",
           deal_id, follow_up, follow_up_anotacao);
}

pub fn log_updates_planned(updates: usize, matched_rows: usize) {
    info!("📝 {} escritas planejadas para {} linhas", updates, matched_rows);
}

pub fn log_sync_finished(updates: usize, duration_ms: u64) {
    info!("✅ Sincronização concluída: {} células atualizadas em {}ms", updates, duration_ms);
}

pub fn log_crm_api_error(status: Option<u16>, error: &str) {
    error!("RD Station CRM error - Status: {:?} - Error: {}", status, error);
}

pub fn log_sheets_api_error(operation: &str, error: &str) {
    error!("Google Sheets API error: {} - Error: {}", operation, error);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 CRM anotações sync server starting on port {}", port);
}

pub fn log_server_ready(port: u16) {
    info!("✅ Server ready and listening on http://0.0.0.0:{}", port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
