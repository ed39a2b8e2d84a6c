//! Sign-in adapter over the identity provider and the `users` collection.
//!
//! A sign-in is one credential check followed by exactly one profile read.
//! The session lives in a `watch` channel: successful sign-ins publish the
//! hydrated [`User`], sign-outs publish `None`.

mod session;

pub use session::{PendingSignIn, Subscription};

use std::sync::Arc;

use dashboard_common::{ProfileDocument, User};
use tokio::sync::watch;

use crate::provider::{DocumentStore, Identity, IdentityProvider, ProviderError};

/// Collection holding one profile document per identity.
pub const USERS_COLLECTION: &str = "users";

/// Why a sign-in produced no user.
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No usable profile document for {0}")]
    ProfileNotFound(String),

    #[error("Provider unreachable: {0}")]
    Network(String),

    #[error("Provider error: {0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for SignInError {
    fn from(e: ProviderError) -> Self {
        if e.is_invalid_credentials() {
            SignInError::InvalidCredentials
        } else if let ProviderError::Network(message) = e {
            SignInError::Network(message)
        } else {
            SignInError::Provider(e)
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    user: User,
    identity: Identity,
}

/// Session owner: signs users in and out and notifies subscribers.
pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
    session: watch::Sender<Option<Session>>,
}

impl AuthService {
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            identity,
            store,
            session,
        }
    }

    /// Sign in and hydrate the profile, collapsing every failure to `None`.
    pub async fn sign_in_with_email(&self, email: &str, password: &str) -> Option<User> {
        match self.try_sign_in_with_email(email, password).await {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Sign-in failed for {}: {}", email, e);
                None
            }
        }
    }

    /// Sign in and hydrate the profile, reporting why it failed.
    pub async fn try_sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<User, SignInError> {
        let identity = self.identity.sign_in_with_password(email, password).await?;

        let document = self
            .store
            .get_document(USERS_COLLECTION, &identity.uid, Some(&identity.id_token))
            .await?
            .ok_or_else(|| SignInError::ProfileNotFound(identity.uid.clone()))?;

        let profile: ProfileDocument = document.decode().map_err(|e| {
            tracing::warn!("Profile {} is malformed: {}", identity.uid, e);
            SignInError::ProfileNotFound(identity.uid.clone())
        })?;

        let user = User::from_profile(identity.uid.clone(), profile);
        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

        self.session.send_replace(Some(Session {
            user: user.clone(),
            identity,
        }));
        Ok(user)
    }

    /// Run a sign-in as an abortable task.
    ///
    /// Aborting before the profile read completes leaves the session untouched.
    pub fn spawn_sign_in(self: &Arc<Self>, email: String, password: String) -> PendingSignIn {
        let service = Arc::clone(self);
        PendingSignIn::spawn(async move { service.sign_in_with_email(&email, &password).await })
    }

    /// Sign out. Provider failures are logged and otherwise ignored.
    pub async fn sign_out(&self) {
        let identity = self
            .session
            .borrow()
            .as_ref()
            .map(|session| session.identity.clone());

        if let Err(e) = self.identity.sign_out(identity.as_ref()).await {
            tracing::warn!("Provider sign-out failed: {}", e);
        }

        let signed_out = self.session.send_if_modified(|session| session.take().is_some());
        if signed_out {
            tracing::info!("User signed out");
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.session
            .borrow()
            .as_ref()
            .map(|session| session.user.clone())
    }

    /// Call `callback` with the current user now and on every identity change.
    ///
    /// Delivery stops when the returned handle is dropped or unsubscribed.
    pub fn on_auth_state_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<User>) + Send + Sync + 'static,
    {
        Subscription::spawn(self.session.subscribe(), move |session| {
            callback(session.map(|s| s.user))
        })
    }
}
