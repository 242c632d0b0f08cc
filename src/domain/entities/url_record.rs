//! URL record entity returned by the upstream URL service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for a short URL as published by the upstream URL service.
///
/// The same JSON shape is used for the upstream `data` payload and for the
/// value stored in the cache, so a record read from either source is
/// interchangeable. `destination_url` is stored exactly as received and may
/// lack a scheme; see [`crate::utils::url_norm::ensure_scheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub short_url_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub short_code: String,
    pub destination_url: String,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> UrlRecord {
        UrlRecord {
            short_url_id: "42".to_string(),
            title: "Docs".to_string(),
            description: None,
            short_code: "abc".to_string(),
            destination_url: "example.com/docs".to_string(),
            user_id: 7,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_description_omitted_when_absent() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["destination_url"], "example.com/docs");
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_deserialize_null_description() {
        let json = r#"{
            "short_url_id": "42",
            "title": "Docs",
            "description": null,
            "short_code": "abc",
            "destination_url": "https://example.com",
            "user_id": 7,
            "created_at": "2024-05-01T12:00:00.000Z"
        }"#;

        let record: UrlRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.description, None);
        assert_eq!(record.user_id, 7);
    }

    #[test]
    fn test_deserialize_rejects_missing_destination() {
        let json = r#"{"short_url_id":"1","title":"t","short_code":"a","user_id":1,"created_at":"2024-05-01T12:00:00Z"}"#;
        assert!(serde_json::from_str::<UrlRecord>(json).is_err());
    }
}
