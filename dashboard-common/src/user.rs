//! Signed-in user records.

use serde::{Deserialize, Serialize};

/// Profile fields stored in the `users/{uid}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDocument {
    pub prenom: String,
    pub nom: String,
    pub email: String,
    pub role: String,
    pub role_front: String,
    /// Full-time-equivalent fraction (e.g. 0.8).
    #[serde(default)]
    pub etp: Option<f64>,
    #[serde(default)]
    pub genre: Option<String>,
}

/// A signed-in user: the provider identity key merged with its profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub prenom: String,
    pub nom: String,
    pub email: String,
    pub role: String,
    pub role_front: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl User {
    pub fn from_profile(id: impl Into<String>, profile: ProfileDocument) -> Self {
        Self {
            id: id.into(),
            prenom: profile.prenom,
            nom: profile.nom,
            email: profile.email,
            role: profile.role,
            role_front: profile.role_front,
            etp: profile.etp,
            genre: profile.genre,
        }
    }

    /// "Prénom Nom", for the header.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom).trim().to_string()
    }

    /// Uppercase initials, e.g. "JD".
    pub fn initials(&self) -> String {
        [&self.prenom, &self.nom]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileDocument {
        ProfileDocument {
            prenom: "Jean".to_string(),
            nom: "Dupont".to_string(),
            email: "jean@x.com".to_string(),
            role: "agent".to_string(),
            role_front: "agent".to_string(),
            etp: None,
            genre: None,
        }
    }

    #[test]
    fn test_from_profile_copies_fields() {
        let user = User::from_profile("uid-1", profile());
        assert_eq!(user.id, "uid-1");
        assert_eq!(user.prenom, "Jean");
        assert_eq!(user.nom, "Dupont");
        assert_eq!(user.email, "jean@x.com");
        assert_eq!(user.role, "agent");
        assert_eq!(user.role_front, "agent");
        assert_eq!(user.etp, None);
    }

    #[test]
    fn test_display_name_and_initials() {
        let user = User::from_profile("uid-1", profile());
        assert_eq!(user.display_name(), "Jean Dupont");
        assert_eq!(user.initials(), "JD");
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let user = User::from_profile("uid-1", profile());
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("etp").is_none());
        assert!(json.get("genre").is_none());
    }
}
