//! Uptime handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{domain::communication::mailer::Mailer, infrastructure::http::state::AppState};

/// The uptime response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UptimeResponse {
    /// The uptime of the application in seconds
    #[schema(example = 123)]
    pub uptime: i64,
}

/// Get the uptime of the application
#[utoipa::path(
    get,
    operation_id = "uptime",
    tag = "System",
    path = "/api/uptime",
    responses(
        (status = StatusCode::OK, description = "Uptime response", body = UptimeResponse),
    )
)]
pub async fn handler<M: Mailer>(State(state): State<AppState<M>>) -> Json<UptimeResponse> {
    let uptime = Utc::now().timestamp() - state.start_time.timestamp();

    Json(UptimeResponse { uptime })
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Utc;
    use testresult::TestResult;

    use crate::infrastructure::http::{
        handlers::api::uptime::UptimeResponse, router, state::tests::test_state,
    };

    #[tokio::test]
    async fn test_uptime_handler() -> TestResult {
        let state = test_state(None);
        let start_time = state.start_time;

        let response = TestServer::new(router(state))?.get("/api/uptime").await;

        response.assert_status_ok();

        let json = response.json::<UptimeResponse>();
        let elapsed = Utc::now().timestamp() - start_time.timestamp();

        assert!(
            json.uptime >= 0 && json.uptime <= elapsed,
            "App uptime should not exceed the time since start"
        );

        Ok(())
    }
}
