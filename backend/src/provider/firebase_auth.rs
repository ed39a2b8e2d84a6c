//! Firebase Identity Toolkit client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{api_error, Identity, IdentityProvider, ProviderError};

/// Email/password sign-in against the Identity Toolkit REST API.
pub struct FirebaseAuthClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl FirebaseAuthClient {
    pub fn new(http_client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    email: Option<String>,
    /// Seconds, sent as a decimal string.
    #[serde(default)]
    expires_in: Option<String>,
}

#[async_trait]
impl IdentityProvider for FirebaseAuthClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, ProviderError> {
        let url = format!("{}/v1/accounts:signInWithPassword", self.base_url);

        tracing::debug!("Signing in {} via {}", email, url);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: SignInResponse = response
            .json()
            .await
            .map_err(ProviderError::from)?;

        Ok(Identity {
            uid: body.local_id,
            id_token: body.id_token,
            refresh_token: body.refresh_token,
            email: body.email,
            expires_in_secs: body.expires_in.and_then(|s| s.parse().ok()),
        })
    }

    async fn sign_out(&self, identity: Option<&Identity>) -> Result<(), ProviderError> {
        // Identity Toolkit keeps no server-side session for ID tokens; dropping
        // the tokens is the whole sign-out.
        if let Some(identity) = identity {
            tracing::debug!("Dropping tokens for {}", identity.uid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        let client = FirebaseAuthClient::new(Client::new(), "http://localhost:9099/", "key");
        assert_eq!(client.base_url, "http://localhost:9099");
    }

    #[test]
    fn test_sign_in_request_shape() {
        let json = serde_json::to_value(SignInRequest {
            email: "jean@x.com",
            password: "secret",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(json["returnSecureToken"], true);
        assert_eq!(json["email"], "jean@x.com");
    }
}
