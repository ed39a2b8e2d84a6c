//! Firebase web-app settings.

use std::env;

use serde::{Deserialize, Serialize};

/// The six values a Firebase web app is initialized with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required environment variable: {0}")]
pub struct MissingEnvVar(pub &'static str);

impl FirebaseConfig {
    /// Environment variable names, in field order.
    pub const ENV_VARS: [&'static str; 6] = [
        "NEXT_PUBLIC_FIREBASE_API_KEY",
        "NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN",
        "NEXT_PUBLIC_FIREBASE_PROJECT_ID",
        "NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET",
        "NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID",
        "NEXT_PUBLIC_FIREBASE_APP_ID",
    ];

    /// Load from the process environment.
    ///
    /// Only the API key and project id are required to talk to the REST APIs;
    /// the remaining values default to empty strings.
    pub fn from_env() -> Result<Self, MissingEnvVar> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load through an arbitrary lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MissingEnvVar>
    where
        F: Fn(&str) -> Option<String>,
    {
        let [api_key, auth_domain, project_id, storage_bucket, messaging_sender_id, app_id] =
            Self::ENV_VARS;
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key: get(api_key).ok_or(MissingEnvVar(api_key))?,
            auth_domain: get(auth_domain).unwrap_or_default(),
            project_id: get(project_id).ok_or(MissingEnvVar(project_id))?,
            storage_bucket: get(storage_bucket).unwrap_or_default(),
            messaging_sender_id: get(messaging_sender_id).unwrap_or_default(),
            app_id: get(app_id).unwrap_or_default(),
        })
    }

    /// Which of the six variables are set, without exposing their values.
    pub fn presence<F>(lookup: F) -> Vec<(&'static str, bool)>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::ENV_VARS
            .iter()
            .map(|name| (*name, lookup(name).is_some_and(|v| !v.trim().is_empty())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_full() {
        let config = FirebaseConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_FIREBASE_API_KEY", "key"),
            ("NEXT_PUBLIC_FIREBASE_AUTH_DOMAIN", "demo.firebaseapp.com"),
            ("NEXT_PUBLIC_FIREBASE_PROJECT_ID", "demo"),
            ("NEXT_PUBLIC_FIREBASE_STORAGE_BUCKET", "demo.appspot.com"),
            ("NEXT_PUBLIC_FIREBASE_MESSAGING_SENDER_ID", "123"),
            ("NEXT_PUBLIC_FIREBASE_APP_ID", "1:123:web:abc"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.app_id, "1:123:web:abc");
    }

    #[test]
    fn test_missing_api_key() {
        let err = FirebaseConfig::from_lookup(lookup(&[(
            "NEXT_PUBLIC_FIREBASE_PROJECT_ID",
            "demo",
        )]))
        .unwrap_err();
        assert_eq!(err, MissingEnvVar("NEXT_PUBLIC_FIREBASE_API_KEY"));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let err = FirebaseConfig::from_lookup(lookup(&[
            ("NEXT_PUBLIC_FIREBASE_API_KEY", "key"),
            ("NEXT_PUBLIC_FIREBASE_PROJECT_ID", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err.0, "NEXT_PUBLIC_FIREBASE_PROJECT_ID");
    }

    #[test]
    fn test_presence() {
        let presence = FirebaseConfig::presence(lookup(&[("NEXT_PUBLIC_FIREBASE_API_KEY", "key")]));
        assert_eq!(presence.len(), 6);
        assert_eq!(presence[0], ("NEXT_PUBLIC_FIREBASE_API_KEY", true));
        assert!(presence[1..].iter().all(|(_, set)| !set));
    }
}
