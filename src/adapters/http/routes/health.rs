use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::{adapters::http::app_state::AppState, use_cases::waitlist::StorageKind};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    storage: &'static str,
    database: &'static str,
}

/// Reports which store backend is active and whether the database is
/// reachable. Returns 503 when a database is configured but cannot be
/// reached, including the case where startup already fell back to the
/// in-memory store.
async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    let repo = &app_state.waitlist_repo;
    let durable_configured = app_state.config.database_url.is_some();

    let (healthy, database) = match repo.kind() {
        StorageKind::Postgres => match repo.ping().await {
            Ok(()) => (true, "connected"),
            Err(err) => {
                tracing::error!(error = ?err, "Database health check failed");
                (false, "unreachable")
            }
        },
        StorageKind::Memory if durable_configured => (false, "unreachable"),
        StorageKind::Memory => (true, "not_configured"),
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if healthy { "ok" } else { "degraded" },
            storage: repo.kind().as_str(),
            database,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    use crate::test_utils::{TestAppStateBuilder, test_app_state};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    #[tokio::test]
    async fn memory_store_without_database_is_healthy() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
        assert_eq!(body["database"], "not_configured");
    }

    #[tokio::test]
    async fn memory_fallback_with_configured_database_is_degraded() {
        let app_state = TestAppStateBuilder::new()
            .with_database_url("postgres://localhost/stabilimetric")
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["storage"], "memory");
        assert_eq!(body["database"], "unreachable");
    }
}
