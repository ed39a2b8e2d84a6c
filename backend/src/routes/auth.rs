use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use dashboard_common::User;
use serde::Deserialize;

use crate::error::{ApiError, Result};
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - 401 without detail on any failure.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<User>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::InvalidRequest("email and password are required".to_string()));
    }

    state
        .auth
        .sign_in_with_email(request.email.trim(), &request.password)
        .await
        .map(Json)
        .ok_or(ApiError::SignInFailed)
}

/// POST /auth/logout - always succeeds.
async fn logout(State(state): State<Arc<AppState>>) -> StatusCode {
    state.auth.sign_out().await;
    StatusCode::NO_CONTENT
}

/// GET /auth/session - the signed-in user, or null.
async fn session(State(state): State<Arc<AppState>>) -> Json<Option<User>> {
    Json(state.auth.current_user())
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
        .with_state(state)
}
