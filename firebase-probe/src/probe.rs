//! Collection survey and error classification for the connectivity check.

use commercial_dashboard::provider::{DocumentStore, ProviderError};
use dashboard_common::{Document, MissingEnvVar};

/// Collection the check counts.
pub const COLLECTION: &str = "commissions";
/// How many documents are printed.
pub const SAMPLE_LIMIT: usize = 3;

const PAGE_SIZE: u32 = 300;

/// Outcome of counting one collection.
#[derive(Debug)]
pub struct Survey {
    pub collection: String,
    pub count: usize,
    pub samples: Vec<Document>,
}

/// Count every document in `collection`, following pagination, and keep the
/// first `sample_limit` of them.
pub async fn survey(
    store: &dyn DocumentStore,
    collection: &str,
    sample_limit: usize,
) -> Result<Survey, ProviderError> {
    let mut count = 0;
    let mut samples = Vec::with_capacity(sample_limit);
    let mut page_token: Option<String> = None;

    loop {
        let page = store
            .list_documents(collection, PAGE_SIZE, page_token.as_deref(), None)
            .await?;

        tracing::debug!("Fetched {} documents from {}", page.documents.len(), collection);

        let is_last = page.is_last();
        count += page.documents.len();
        let room = sample_limit.saturating_sub(samples.len());
        samples.extend(page.documents.into_iter().take(room));

        if is_last {
            break;
        }
        if page.next_page_token == page_token {
            tracing::warn!(
                "Pagination of {} returned the same page token twice, stopping",
                collection
            );
            break;
        }
        page_token = page.next_page_token;
    }

    Ok(Survey {
        collection: collection.to_string(),
        count,
        samples,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    MissingConfig(#[from] MissingEnvVar),

    #[error("Permission denied: {0}")]
    PermissionDenied(ProviderError),

    #[error("Not found: {0}")]
    NotFound(ProviderError),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(ProviderError),

    #[error("Connection failed: {0}")]
    Other(ProviderError),
}

impl From<ProviderError> for ProbeError {
    fn from(e: ProviderError) -> Self {
        let status = e.status().map(str::to_owned);
        match status.as_deref() {
            Some("PERMISSION_DENIED") => ProbeError::PermissionDenied(e),
            Some("NOT_FOUND") => ProbeError::NotFound(e),
            _ => {
                let message = e.to_string().to_ascii_lowercase();
                if message.contains("api key") || message.contains("api_key") {
                    ProbeError::InvalidApiKey(e)
                } else {
                    ProbeError::Other(e)
                }
            }
        }
    }
}

impl ProbeError {
    /// What to check next.
    pub fn hint(&self) -> &'static str {
        match self {
            ProbeError::MissingConfig(_) => {
                "Set the NEXT_PUBLIC_FIREBASE_* variables (see the list above)."
            }
            ProbeError::PermissionDenied(_) => {
                "Firestore security rules reject unauthenticated reads of this collection."
            }
            ProbeError::NotFound(_) => {
                "Check NEXT_PUBLIC_FIREBASE_PROJECT_ID and that Firestore is enabled for the project."
            }
            ProbeError::InvalidApiKey(_) => {
                "Check NEXT_PUBLIC_FIREBASE_API_KEY in the Firebase console."
            }
            ProbeError::Other(_) => "Check network access to firestore.googleapis.com.",
        }
    }
}
