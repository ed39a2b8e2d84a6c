pub mod mock_firebase;

use dashboard_common::{ProfileDocument, User};

pub const TEST_PROJECT: &str = "demo-project";
pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_profile() -> ProfileDocument {
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

pub fn test_user(id: &str) -> User {
    User::from_profile(id, test_profile())
}

/// Path of a document under the test project's default database.
pub fn document_path(collection: &str, id: &str) -> String {
    format!(
        "/v1/projects/{}/databases/(default)/documents/{}/{}",
        TEST_PROJECT, collection, id
    )
}

/// Path of a collection under the test project's default database.
pub fn collection_path(collection: &str) -> String {
    format!(
        "/v1/projects/{}/databases/(default)/documents/{}",
        TEST_PROJECT, collection
    )
}
