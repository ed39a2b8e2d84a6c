//! External identity and document-store provider.
//!
//! The dashboard talks to its backend through two narrow traits so the auth
//! adapter can be exercised against mock servers or in-memory fakes. The
//! Firebase implementations speak the Identity Toolkit and Firestore REST APIs.

mod firebase_auth;
mod firestore;

pub use firebase_auth::FirebaseAuthClient;
pub use firestore::FirestoreClient;

use std::time::Duration;

use async_trait::async_trait;
use dashboard_common::{Document, DocumentPage};
use reqwest::{Client, Response};
use serde::Deserialize;

/// Identity-provider messages that mean "these credentials do not sign in".
const CREDENTIAL_ERRORS: [&str; 5] = [
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
    "USER_DISABLED",
];

/// A verified identity issued by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-issued unique key (Firebase `localId`).
    pub uid: String,
    /// Bearer token for document reads on behalf of this identity.
    pub id_token: String,
    pub refresh_token: Option<String>,
    pub email: Option<String>,
    pub expires_in_secs: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Provider returned {code}: {message}")]
    Api {
        code: u16,
        /// Canonical status, e.g. `PERMISSION_DENIED`.
        status: Option<String>,
        message: String,
    },

    #[error("Unexpected provider response: {0}")]
    Decode(String),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    /// Canonical status string of an API error.
    pub fn status(&self) -> Option<&str> {
        match self {
            ProviderError::Api { status, .. } => status.as_deref(),
            _ => None,
        }
    }

    /// Whether the identity provider rejected the credentials themselves.
    pub fn is_invalid_credentials(&self) -> bool {
        match self {
            ProviderError::Api { message, .. } => CREDENTIAL_ERRORS
                .iter()
                .any(|code| message.starts_with(code)),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        // the request URL carries `?key=<api_key>`
        let e = e.without_url();
        if e.is_decode() {
            ProviderError::Decode(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}

/// Verifies credentials.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError>;

    /// End the provider-side session of `identity`, if there is one.
    async fn sign_out(&self, identity: Option<&Identity>) -> Result<(), ProviderError>;
}

/// Keyed document reads.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read `collection/id`. `Ok(None)` when the document does not exist.
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
        id_token: Option<&str>,
    ) -> Result<Option<Document>, ProviderError>;

    /// One page of `collection`.
    async fn list_documents(
        &self,
        collection: &str,
        page_size: u32,
        page_token: Option<&str>,
        id_token: Option<&str>,
    ) -> Result<DocumentPage, ProviderError>;
}

/// Google API error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Build the shared HTTP client with the configured request timeout.
pub fn http_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Network(e.to_string()))
}

/// Turn a non-success response into a [`ProviderError::Api`].
async fn api_error(response: Response) -> ProviderError {
    let code = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => ProviderError::Api {
            code,
            status: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => ProviderError::Api {
            code,
            status: None,
            message: body,
        },
    }
}
