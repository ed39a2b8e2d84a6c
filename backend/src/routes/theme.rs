use std::sync::Arc;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use dashboard_common::Theme;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// GET /theme
async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.theme.current(),
    })
}

/// POST /theme/toggle
async fn toggle_theme(State(state): State<Arc<AppState>>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.theme.toggle(),
    })
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/theme", get(get_theme))
        .route("/theme/toggle", post(toggle_theme))
        .with_state(state)
}
