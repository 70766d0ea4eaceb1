use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub source: &'static str,
    pub started_at: DateTime<Utc>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        source: state.source.name(),
        started_at: state.started_at,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::api::build_router;
    use crate::api::testing::{get_json, setup_test_state, StubSource};

    #[tokio::test]
    async fn test_health() {
        let state = setup_test_state(Arc::new(StubSource::default()));
        let started_at = state.started_at;
        let app = build_router(state);

        let (status, json) = get_json(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["source"], "stub");
        let reported: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(json["startedAt"].clone()).unwrap();
        assert_eq!(reported, started_at);
    }
}
