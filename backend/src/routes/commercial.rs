use std::sync::Arc;
use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::context::{MonthStep, NavigationSnapshot};
use crate::views::{self, CommercialView, Page, ShellView};
use crate::AppState;

#[derive(Serialize)]
struct CommercialResponse {
    shell: ShellView,
    page: CommercialView,
}

#[derive(Deserialize)]
pub struct LoadingRequest {
    pub is_loading: bool,
}

/// GET /commercial - Commercial page inside the shell.
async fn commercial(State(state): State<Arc<AppState>>) -> Json<CommercialResponse> {
    let user = state.auth.current_user();
    Json(CommercialResponse {
        shell: views::shell(Page::Commercial, state.theme.current(), user.as_ref()),
        page: views::commercial(state.navigation.snapshot()),
    })
}

/// POST /commercial/month/previous
async fn previous_month(State(state): State<Arc<AppState>>) -> Json<NavigationSnapshot> {
    Json(state.navigation.navigate(MonthStep::Previous))
}

/// POST /commercial/month/next
async fn next_month(State(state): State<Arc<AppState>>) -> Json<NavigationSnapshot> {
    Json(state.navigation.navigate(MonthStep::Next))
}

/// POST /commercial/month/current
async fn current_month(State(state): State<Arc<AppState>>) -> Json<NavigationSnapshot> {
    Json(state.navigation.navigate(MonthStep::Current))
}

/// PUT /commercial/loading
async fn set_loading(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoadingRequest>,
) -> Json<NavigationSnapshot> {
    Json(state.navigation.set_loading(request.is_loading))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/commercial", get(commercial))
        .route("/commercial/month/previous", post(previous_month))
        .route("/commercial/month/next", post(next_month))
        .route("/commercial/month/current", post(current_month))
        .route("/commercial/loading", put(set_loading))
        .with_state(state)
}
