//! Canned Identity Toolkit and Firestore REST payloads.

use serde_json::{json, Map, Value};

use dashboard_common::ProfileDocument;

use super::TEST_PROJECT;

pub const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";

pub fn sign_in_ok(uid: &str, email: &str, id_token: &str) -> Value {
    json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": uid,
        "email": email,
        "displayName": "",
        "idToken": id_token,
        "registered": true,
        "refreshToken": format!("refresh-{}", uid),
        "expiresIn": "3600"
    })
}

/// Identity Toolkit error, e.g. `INVALID_PASSWORD`.
pub fn auth_error(message: &str) -> Value {
    json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{"message": message, "domain": "global", "reason": "invalid"}]
        }
    })
}

/// Firestore error envelope, e.g. `(403, "PERMISSION_DENIED", ...)`.
pub fn firestore_error(code: u16, status: &str, message: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message,
            "status": status
        }
    })
}

pub fn document(collection: &str, id: &str, fields: Map<String, Value>) -> Value {
    json!({
        "name": format!(
            "projects/{}/databases/(default)/documents/{}/{}",
            TEST_PROJECT, collection, id
        ),
        "fields": fields,
        "createTime": "2025-01-01T00:00:00.000000Z",
        "updateTime": "2025-01-01T00:00:00.000000Z"
    })
}

/// A `users/{uid}` document in Firestore's typed encoding.
pub fn profile_document(uid: &str, profile: &ProfileDocument) -> Value {
    let mut fields = Map::new();
    for (key, value) in [
        ("prenom", &profile.prenom),
        ("nom", &profile.nom),
        ("email", &profile.email),
        ("role", &profile.role),
        ("role_front", &profile.role_front),
    ] {
        fields.insert(key.to_string(), json!({ "stringValue": value }));
    }
    if let Some(etp) = profile.etp {
        fields.insert("etp".to_string(), json!({ "doubleValue": etp }));
    }
    if let Some(ref genre) = profile.genre {
        fields.insert("genre".to_string(), json!({ "stringValue": genre }));
    }
    document("users", uid, fields)
}
