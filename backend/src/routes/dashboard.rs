use std::sync::Arc;
use axum::{extract::State, routing::get, Json, Router};

use crate::views::{self, Page, ShellView};
use crate::AppState;

/// GET /dashboard - Shell with the generic dashboard content.
async fn dashboard(State(state): State<Arc<AppState>>) -> Json<ShellView> {
    let user = state.auth.current_user();
    Json(views::shell(Page::Dashboard, state.theme.current(), user.as_ref()))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .with_state(state)
}
