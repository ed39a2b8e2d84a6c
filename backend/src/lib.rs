pub mod auth;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod provider;
pub mod routes;
pub mod test_util;
pub mod views;

pub use auth::{AuthService, PendingSignIn, SignInError, Subscription};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, FirebaseSettings};
pub use context::{MonthStep, NavigationContext, NavigationSnapshot, ThemeContext};
pub use provider::{
    DocumentStore, FirebaseAuthClient, FirestoreClient, Identity, IdentityProvider, ProviderError,
};

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
pub struct AppState {
    /// Month cursor of the commercial module.
    pub navigation: NavigationContext,
    pub theme: ThemeContext,
    /// Session owner; shared so sign-ins can run as background tasks.
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(navigation: NavigationContext, theme: ThemeContext, auth: Arc<AuthService>) -> Self {
        Self {
            navigation,
            theme,
            auth,
        }
    }

    /// Wire the Firebase clients and the wall clock from configuration.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let firebase = &config.firebase;
        let http_client = provider::http_client(firebase.request_timeout())?;

        let identity = Arc::new(FirebaseAuthClient::new(
            http_client.clone(),
            &firebase.identity_base_url,
            &firebase.api_key,
        ));
        let store = Arc::new(FirestoreClient::new(
            http_client,
            &firebase.firestore_base_url,
            &firebase.project_id,
            &firebase.api_key,
        ));

        Ok(Self::new(
            NavigationContext::new(Arc::new(SystemClock)),
            ThemeContext::new(config.ui.default_theme),
            Arc::new(AuthService::new(identity, store)),
        ))
    }
}

/// Build the full HTTP application.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::dashboard::router(state.clone()))
        .merge(routes::commercial::router(state.clone()))
        .merge(routes::theme::router(state.clone()))
        .merge(routes::auth::router(state))
        .layer(middleware::from_fn(logging::request_logger))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
