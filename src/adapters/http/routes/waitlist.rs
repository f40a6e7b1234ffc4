use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_signup).get(list_signups))
}

async fn create_signup(
    State(app_state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let signup = app_state.waitlist_use_cases.submit(&payload).await?;

    Ok((StatusCode::CREATED, Json(signup)))
}

async fn list_signups(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let signups = app_state.waitlist_use_cases.list_all().await?;

    Ok(Json(signups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::{TestAppStateBuilder, signup_payload, test_app_state};

    fn build_test_router(app_state: AppState) -> Router<()> {
        router().with_state(app_state)
    }

    #[tokio::test]
    async fn create_signup_returns_201_with_stored_record() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        let response = server
            .post("/")
            .json(&json!({ "email": "a@x.com", "name": "A", "companyName": "X" }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["email"], "a@x.com");
        assert_eq!(body["name"], "A");
        assert_eq!(body["companyName"], "X");
        assert_eq!(body["isPilotPartner"], false);
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());
        // Absent optionals serialize as null, never as "".
        assert!(body["phoneNumber"].is_null());
        assert!(body["role"].is_null());
        assert!(body["companySize"].is_null());
    }

    #[tokio::test]
    async fn duplicate_email_returns_409_and_keeps_first_record() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        server
            .post("/")
            .json(&json!({ "email": "a@x.com", "name": "A", "companyName": "X" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .post("/")
            .json(&json!({ "email": "a@x.com", "name": "B", "companyName": "Y" }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"], "This email is already on the waitlist");

        let listed = server.get("/").await.json::<serde_json::Value>();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "A");
    }

    #[tokio::test]
    async fn missing_email_returns_400_with_field_details() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        let response = server
            .post("/")
            .json(&json!({ "name": "A", "companyName": "X" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"], "Invalid request data");
        let details = body["details"].as_array().unwrap();
        assert!(details.iter().any(|d| d["field"] == "email"));
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.json::<serde_json::Value>().as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_returns_submitted_records() {
        let server = TestServer::new(build_test_router(test_app_state())).unwrap();

        for i in 0..3 {
            server
                .post("/")
                .json(&signup_payload(&format!("user{i}@x.com"), |_| {}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let body = server.get("/").await.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn storage_failure_returns_500_with_generic_message() {
        use async_trait::async_trait;
        use std::sync::Arc;

        use crate::{
            app_error::{AppError, AppResult},
            entities::waitlist_signup::{NewWaitlistSignup, WaitlistSignup},
            use_cases::waitlist::{StorageKind, WaitlistRepo},
        };

        struct FailingRepo;

        #[async_trait]
        impl WaitlistRepo for FailingRepo {
            async fn create(&self, _signup: NewWaitlistSignup) -> AppResult<WaitlistSignup> {
                Err(AppError::Database("connection refused".into()))
            }

            async fn find_by_email(&self, _email: &str) -> AppResult<Option<WaitlistSignup>> {
                Ok(None)
            }

            async fn list_all(&self) -> AppResult<Vec<WaitlistSignup>> {
                Err(AppError::Database("connection refused".into()))
            }

            fn kind(&self) -> StorageKind {
                StorageKind::Postgres
            }

            async fn ping(&self) -> AppResult<()> {
                Err(AppError::Database("connection refused".into()))
            }
        }

        let app_state = TestAppStateBuilder::new()
            .with_repo(Arc::new(FailingRepo))
            .build();
        let server = TestServer::new(build_test_router(app_state)).unwrap();

        let response = server
            .post("/")
            .json(&json!({ "email": "a@x.com", "name": "A", "companyName": "X" }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        // Internal detail never reaches the client.
        assert_eq!(body["error"], "Failed to process request");

        server
            .get("/")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
