//! HTTP transport for the consignment service.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use consignment_core::{
    Consignment, ConsignmentService, CreateResponse, Error, ErrorKind, ListResponse, MemoryStore,
    ServiceConfig, VesselClient,
};
use serde_json::{json, Value};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// The service as wired for production.
pub type Service = ConsignmentService<VesselClient, MemoryStore>;

/// Shared state handed to every request handler.
pub struct AppState {
    pub service: Service,
    pub config: ServiceConfig,
}

impl AppState {
    /// Wire an empty store and the configured vessel finder.
    pub fn from_config(config: ServiceConfig) -> consignment_core::Result<Self> {
        let finder = VesselClient::from_config(&config)?;
        let store = match config.max_consignments {
            Some(limit) => MemoryStore::with_limit(limit),
            None => MemoryStore::new(),
        };
        info!(vessels = %finder.describe(), "vessel finder configured");

        let service = ConsignmentService::new(finder, store)
            .with_lookup_timeout(config.vessel_service.timeout());

        Ok(Self { service, config })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/consignments",
            get(list_consignments).post(create_consignment),
        )
        .with_state(state)
}

/// Error body returned for a failed create.
struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind();
        let status = match kind {
            ErrorKind::Invalid => StatusCode::BAD_REQUEST,
            ErrorKind::VesselUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::RemoteCallFailed => StatusCode::BAD_GATEWAY,
            ErrorKind::StorageFailed | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "created": false,
            "error": {
                "kind": kind,
                "message": self.0.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

async fn create_consignment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Consignment>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("create_consignment", %request_id);

    async move {
        let consignment = match payload {
            Ok(Json(consignment)) => consignment,
            Err(rejection) => {
                warn!(status = %rejection.status(), "malformed consignment body");
                return Err(ApiError(Error::Invalid(rejection.body_text())));
            }
        };

        match state.service.create_consignment(&consignment).await {
            Ok(response) => {
                info!(
                    vessel_id = %response.consignment.vessel_id,
                    containers = response.consignment.containers.len(),
                    "consignment created"
                );
                Ok((StatusCode::CREATED, Json(response)))
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "consignment rejected");
                Err(ApiError(e))
            }
        }
    }
    .instrument(span)
    .await
}

async fn list_consignments(State(state): State<Arc<AppState>>) -> Json<ListResponse> {
    Json(state.service.list_consignments())
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.config.service_name,
        "version": state.config.version,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use consignment_core::{Vessel, VesselServiceConfig};
    use tower::ServiceExt;

    fn app_with(config: ServiceConfig) -> Router {
        router(Arc::new(AppState::from_config(config).unwrap()))
    }

    fn app() -> Router {
        app_with(ServiceConfig {
            fleet: vec![Vessel::new("v1", "Boaty", 6000, 2)],
            ..ServiceConfig::default()
        })
    }

    fn post_raw(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/consignments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        post_raw(&body.to_string())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(json!({
                "weight": 5000,
                "containers": [{"id": "A"}, {"id": "B"}]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["created"], true);
        assert_eq!(body["consignment"]["vessel_id"], "v1");

        let response = app.oneshot(get_request("/consignments")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["consignments"].as_array().unwrap().len(), 1);
        assert_eq!(body["consignments"][0]["weight"], 5000);
    }

    #[tokio::test]
    async fn test_no_vessel_available() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(json!({"weight": 999999, "containers": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["error"]["kind"], "vesselUnavailable");

        let body = body_json(app.oneshot(get_request("/consignments")).await.unwrap()).await;
        assert!(body["consignments"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_weight_is_bad_request() {
        let response = app()
            .oneshot(post_json(json!({"weight": -1})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["kind"], "invalid");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = app().oneshot(post_raw("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["error"]["kind"], "invalid");
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let response = app()
            .oneshot(post_json(json!({"weight": "heavy", "containers": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["error"]["kind"], "invalid");
    }

    #[tokio::test]
    async fn test_missing_weight_defaults_to_zero() {
        let response = app()
            .oneshot(post_json(json!({"containers": [{"id": "A"}]})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["consignment"]["weight"], 0);
    }

    #[tokio::test]
    async fn test_unreachable_vessel_service_is_bad_gateway() {
        let app = app_with(ServiceConfig {
            vessel_service: VesselServiceConfig {
                // Port 9 (discard) is not expected to be listening
                url: "http://127.0.0.1:9".to_string(),
                timeout_ms: 2000,
            },
            ..ServiceConfig::default()
        });

        let response = app
            .clone()
            .oneshot(post_json(json!({"weight": 10, "containers": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["error"]["kind"], "remoteCallFailed");

        let body = body_json(app.oneshot(get_request("/consignments")).await.unwrap()).await;
        assert!(body["consignments"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_full_store_is_server_error() {
        let app = app_with(ServiceConfig {
            fleet: vec![Vessel::new("v1", "Boaty", 6000, 2)],
            max_consignments: Some(0),
            ..ServiceConfig::default()
        });

        let response = app
            .clone()
            .oneshot(post_json(json!({"weight": 10, "containers": []})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["created"], false);
        assert_eq!(body["error"]["kind"], "storageFailed");

        let body = body_json(app.oneshot(get_request("/consignments")).await.unwrap()).await;
        assert!(body["consignments"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_empty() {
        let response = app().oneshot(get_request("/consignments")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body, json!({"consignments": []}));
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "go.micro.srv.consignment");
        assert_eq!(body["version"], "latest");
    }
}
