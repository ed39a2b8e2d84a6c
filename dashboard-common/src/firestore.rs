//! Cloud Firestore REST document types.
//!
//! Firestore wraps every field in a typed envelope (`{"stringValue": "x"}`,
//! `{"integerValue": "42"}`, ...). [`decode_value`] unwraps those envelopes
//! into plain JSON so documents can be deserialized into ordinary structs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A single Firestore document as returned by the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name: `projects/{p}/databases/(default)/documents/{collection}/{id}`.
    pub name: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

/// One page of a collection listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPage {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Document {
    /// Document id (last segment of the resource name).
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Fields with the typed envelopes removed.
    pub fn to_json(&self) -> Value {
        Value::Object(decode_fields(&self.fields))
    }

    /// Deserialize the decoded fields into `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

impl DocumentPage {
    /// `true` when there is no further page to fetch.
    pub fn is_last(&self) -> bool {
        self.next_page_token
            .as_deref()
            .map_or(true, |token| token.is_empty())
    }
}

/// Decode a Firestore `fields` map.
pub fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Decode a single typed Firestore value.
///
/// Unknown envelopes are passed through untouched.
pub fn decode_value(value: &Value) -> Value {
    let Some(envelope) = value.as_object() else {
        return value.clone();
    };
    let Some((kind, inner)) = envelope.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" | "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => {
            inner.clone()
        }
        // int64 values travel as decimal strings
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|n| Value::Number(n.into()))
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "doubleValue" => match inner {
            Value::Number(_) => inner.clone(),
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            _ => Value::Null,
        },
        "mapValue" => inner
            .get("fields")
            .and_then(Value::as_object)
            .map(|fields| Value::Object(decode_fields(fields)))
            .unwrap_or_else(|| Value::Object(Map::new())),
        "arrayValue" => inner
            .get("values")
            .and_then(Value::as_array)
            .map(|values| Value::Array(values.iter().map(decode_value).collect()))
            .unwrap_or_else(|| Value::Array(Vec::new())),
        "geoPointValue" => inner.clone(),
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileDocument;
    use serde_json::json;

    fn document(fields: Value) -> Document {
        serde_json::from_value(json!({
            "name": "projects/demo/databases/(default)/documents/users/uid-1",
            "fields": fields,
            "createTime": "2025-01-01T00:00:00Z",
            "updateTime": "2025-01-02T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_document_id() {
        let doc = document(json!({}));
        assert_eq!(doc.id(), "uid-1");
    }

    #[test]
    fn test_decode_scalars() {
        assert_eq!(decode_value(&json!({"stringValue": "x"})), json!("x"));
        assert_eq!(decode_value(&json!({"integerValue": "42"})), json!(42));
        assert_eq!(decode_value(&json!({"doubleValue": 0.5})), json!(0.5));
        assert_eq!(decode_value(&json!({"booleanValue": true})), json!(true));
        assert_eq!(decode_value(&json!({"nullValue": null})), Value::Null);
        assert_eq!(
            decode_value(&json!({"timestampValue": "2025-03-01T10:00:00Z"})),
            json!("2025-03-01T10:00:00Z")
        );
    }

    #[test]
    fn test_decode_nested() {
        let value = json!({
            "mapValue": {"fields": {
                "montant": {"doubleValue": 120.5},
                "tags": {"arrayValue": {"values": [{"stringValue": "auto"}, {"integerValue": "3"}]}}
            }}
        });
        assert_eq!(
            decode_value(&value),
            json!({"montant": 120.5, "tags": ["auto", 3]})
        );
        assert_eq!(decode_value(&json!({"arrayValue": {}})), json!([]));
    }

    #[test]
    fn test_decode_profile_with_integer_etp() {
        let doc = document(json!({
            "prenom": {"stringValue": "Jean"},
            "nom": {"stringValue": "Dupont"},
            "email": {"stringValue": "jean@x.com"},
            "role": {"stringValue": "agent"},
            "role_front": {"stringValue": "agent"},
            "etp": {"integerValue": "1"}
        }));
        let profile: ProfileDocument = doc.decode().unwrap();
        assert_eq!(profile.etp, Some(1.0));
        assert_eq!(profile.genre, None);
    }

    #[test]
    fn test_decode_profile_with_double_etp_and_genre() {
        let doc = document(json!({
            "prenom": {"stringValue": "Marie"},
            "nom": {"stringValue": "Curie"},
            "email": {"stringValue": "marie@x.com"},
            "role": {"stringValue": "manager"},
            "role_front": {"stringValue": "Manager"},
            "etp": {"doubleValue": 0.8},
            "genre": {"stringValue": "F"}
        }));
        let profile: ProfileDocument = doc.decode().unwrap();
        assert_eq!(profile.etp, Some(0.8));
        assert_eq!(profile.genre.as_deref(), Some("F"));
    }

    #[test]
    fn test_decode_profile_missing_required_field_fails() {
        let doc = document(json!({"prenom": {"stringValue": "Jean"}}));
        assert!(doc.decode::<ProfileDocument>().is_err());
    }

    #[test]
    fn test_page_is_last() {
        let page: DocumentPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.is_last());
        let page: DocumentPage =
            serde_json::from_value(json!({"documents": [], "nextPageToken": "abc"})).unwrap();
        assert!(!page.is_last());
    }
}
