use crate::domain::reward::RewardRequest;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn simulate(
    State(state): State<AppState>,
    Json(req): Json<RewardRequest>,
) -> impl IntoResponse {
    match state.reward_service.simulate(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({"status": "ok"})),
    )
        .into_response()
}
