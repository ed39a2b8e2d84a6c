//! Cloud Firestore REST client.

use async_trait::async_trait;
use dashboard_common::{Document, DocumentPage};
use reqwest::{Client, RequestBuilder, StatusCode, Url};

use super::{api_error, DocumentStore, ProviderError};

/// Reads documents from one project's default database.
pub struct FirestoreClient {
    http_client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl FirestoreClient {
    pub fn new(http_client: Client, base_url: &str, project_id: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// `{base}/v1/projects/{p}/databases/(default)/documents/{segments...}`,
    /// each segment percent-encoded on its own.
    fn documents_url(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v1", "projects", self.project_id.as_str(), "databases", "(default)", "documents"])
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url, id_token: Option<&str>) -> RequestBuilder {
        let request = self
            .http_client
            .get(url)
            .query(&[("key", self.api_key.as_str())]);
        match id_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
        id_token: Option<&str>,
    ) -> Result<Option<Document>, ProviderError> {
        let url = self.documents_url(&[collection, id])?;

        tracing::debug!("Reading Firestore document {}/{}", collection, id);

        let response = self.get(url, id_token).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let document = response
            .json()
            .await
            .map_err(ProviderError::from)?;
        Ok(Some(document))
    }

    async fn list_documents(
        &self,
        collection: &str,
        page_size: u32,
        page_token: Option<&str>,
        id_token: Option<&str>,
    ) -> Result<DocumentPage, ProviderError> {
        let url = self.documents_url(&[collection])?;
        let page_size = page_size.to_string();

        let mut request = self
            .get(url, id_token)
            .query(&[("pageSize", page_size.as_str())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        tracing::debug!("Listing Firestore collection {}", collection);

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(ProviderError::from)
    }
}
