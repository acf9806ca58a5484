// Serviço de sincronização de anotações do RD Station CRM com Google Sheets
// Expõe módulos para uso em testes e no binário

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use utils::{AppError, AppResult};

// AppState é compartilhado entre os handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    /// `None` quando o token do CRM não está configurado: todo POST responde 500
    pub job: Option<services::SyncJob>,
}

impl AppState {
    pub fn from_settings(settings: config::Settings) -> AppResult<Self> {
        let sheets_client = sheets::SheetsClient::with_base_url(&settings.sheets.base_url)
            .map_err(|e| AppError::ConfigError(format!("Failed to create Sheets client: {}", e)))?;

        let job = match settings.crm.token() {
            Some(token) => {
                let feed = rdstation::ActivityFeedClient::with_base_url(
                    token,
                    &settings.crm.base_url,
                    settings.crm.page_size,
                )
                .map_err(|e| AppError::ConfigError(format!("Failed to create CRM client: {}", e)))?;

                Some(services::SyncJob::new(feed, sheets_client).with_read_range(&settings.sheets.read_range))
            }
            None => None,
        };

        Ok(Self { settings, job })
    }
}

/// Panic em handler vira 500 genérico; o detalhe fica só no log
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic".to_string());

    AppError::InternalError(format!("panic: {}", detail)).into_response()
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::status_check))
        .route(
            handlers::SYNC_ENDPOINT,
            post(handlers::sync_anotacoes).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use httpmock::prelude::*;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn settings(crm_token: Option<&str>, base_url: &str) -> config::Settings {
        config::Settings {
            server: config::settings::ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            crm: config::settings::CrmSettings {
                token: crm_token.map(str::to_string),
                base_url: base_url.to_string(),
                page_size: 200,
            },
            sheets: config::settings::SheetsSettings {
                base_url: base_url.to_string(),
                read_range: "A1:ZZ".to_string(),
            },
        }
    }

    fn app(crm_token: Option<&str>, base_url: &str) -> Router {
        let state = AppState::from_settings(settings(crm_token, base_url)).unwrap();
        build_router(Arc::new(state))
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(handlers::SYNC_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_parameters_are_named() {
        let response = app(Some("crm"), "http://127.0.0.1:1")
            .oneshot(post_json(json!({ "sheetName": "Leads" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("accessToken"));
        assert!(message.contains("spreadsheetId"));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri(handlers::SYNC_ENDPOINT)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();

        let response = app(Some("crm"), "http://127.0.0.1:1").oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        let request = Request::builder()
            .method(Method::GET)
            .uri(handlers::SYNC_ENDPOINT)
            .body(Body::empty())
            .unwrap();

        let response = app(Some("crm"), "http://127.0.0.1:1").oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = read_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("GET"));
    }

    #[tokio::test]
    async fn test_missing_crm_token_fails_every_call() {
        let response = app(None, "http://127.0.0.1:1")
            .oneshot(post_json(json!({ "accessToken": "t", "spreadsheetId": "s" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("RD_CRM_TOKEN"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(handlers::SYNC_ENDPOINT)
            .header(header::ORIGIN, "https://crm-manual.example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app(Some("crm"), "http://127.0.0.1:1").oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_successful_sync_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/activities").query_param("token", "crm");
                then.status(200).json_body(json!({
                    "activities": [
                        { "deal_id": "D1", "date": "2024-03-15", "text": "Ligar" },
                        { "deal_id": 42, "date": "2024-03-10", "text": "" }
                    ],
                    "has_more": false
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/spreadsheets/sid/values/");
                then.status(200).json_body(json!({
                    "values": [
                        ["deal_id", "follow_up", "follow_up_anotacao"],
                        ["D1"],
                        ["42"],
                        ["D9"]
                    ]
                }));
            })
            .await;
        let batch = server
            .mock_async(|when, then| {
                when.method(POST).path("/spreadsheets/sid/values:batchUpdate");
                then.status(200).json_body(json!({ "totalUpdatedCells": 3 }));
            })
            .await;

        let response = app(Some("crm"), &server.base_url())
            .oneshot(post_json(json!({ "accessToken": "user", "spreadsheetId": "sid" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["dealsAtualizados"], json!(3));
        batch.assert_async().await;
    }

    #[tokio::test]
    async fn test_crm_failure_is_bad_gateway() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/activities");
                then.status(500).json_body(json!({ "error": "Internal Server Error" }));
            })
            .await;

        let response = app(Some("crm"), &server.base_url())
            .oneshot(post_json(json!({ "accessToken": "user", "spreadsheetId": "sid" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = read_json(response).await;
        assert_eq!(body["message"], json!("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(None, "http://127.0.0.1:1").oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn test_status_never_exposes_secret() {
        let request = Request::builder().uri("/status").body(Body::empty()).unwrap();
        let response = app(Some("super-secret"), "http://127.0.0.1:1").oneshot(request).await.unwrap();

        let body = read_json(response).await;
        assert_eq!(body["integrations"]["crm"]["token_configured"], json!(true));
        assert!(!body.to_string().contains("super-secret"));
    }

    #[test]
    fn test_panic_becomes_generic_internal_error() {
        let response = handle_panic(Box::new("boom at src/x.rs"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
