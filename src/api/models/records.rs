use crate::core::error::{RecordError, Result};
use crate::db::models::Record;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Record API models

/// Request body for creating a record; both fields are required
#[derive(Debug, Default, Deserialize)]
pub struct CreateRecordRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Request body for a partial update
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRecordRequest {
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Query parameters for listing records
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListRecordsQuery {
    pub status: Option<String>,
}

impl ListRecordsQuery {
    /// Build from raw query pairs; a repeated `status` keeps its first value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let status = pairs
            .into_iter()
            .find(|(key, _)| key == "status")
            .map(|(_, value)| value);
        Self { status }
    }
}

/// One entry of the list response; the id is the map key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub name: String,
    pub status: String,
    pub created_at: String,
}

impl From<Record> for RecordSummary {
    fn from(record: Record) -> Self {
        Self {
            name: record.name,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// List response: record id -> summary
pub type RecordListing = BTreeMap<String, RecordSummary>;

/// Response for a created record
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRecordResponse {
    pub message: String,
    pub id: String,
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse a raw request body into `T`
///
/// An empty body, `null` or an empty object yields `Ok(None)` so callers can
/// report "no data" in their own words. Anything that is not a JSON object,
/// or has fields of the wrong type, is a validation error.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| RecordError::ValidationError(format!("Invalid JSON body: {}", e)))?;

    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| RecordError::ValidationError(format!("Invalid request body: {}", e))),
        _ => Err(RecordError::ValidationError(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_empty_variants() {
        assert!(parse_body::<CreateRecordRequest>(b"").unwrap().is_none());
        assert!(parse_body::<CreateRecordRequest>(b"  \n").unwrap().is_none());
        assert!(parse_body::<CreateRecordRequest>(b"null").unwrap().is_none());
        assert!(parse_body::<CreateRecordRequest>(b"{}").unwrap().is_none());
    }

    #[test]
    fn test_parse_body_object() {
        let req = parse_body::<UpdateRecordRequest>(br#"{"status":"closed","extra":1}"#)
            .unwrap()
            .unwrap();
        assert_eq!(req.status.as_deref(), Some("closed"));
        assert!(req.name.is_none());
    }

    #[test]
    fn test_parse_body_rejects_garbage() {
        assert!(matches!(
            parse_body::<CreateRecordRequest>(b"{not json"),
            Err(RecordError::ValidationError(_))
        ));
        assert!(matches!(
            parse_body::<CreateRecordRequest>(b"[1,2]"),
            Err(RecordError::ValidationError(_))
        ));
        assert!(matches!(
            parse_body::<CreateRecordRequest>(br#"{"name": 5, "status": "open"}"#),
            Err(RecordError::ValidationError(_))
        ));
    }

    #[test]
    fn test_list_query_takes_first_status() {
        let pairs = vec![
            ("status".to_string(), "closed".to_string()),
            ("other".to_string(), "x".to_string()),
            ("status".to_string(), "open".to_string()),
        ];
        assert_eq!(
            ListRecordsQuery::from_pairs(pairs).status.as_deref(),
            Some("closed")
        );
        assert!(ListRecordsQuery::from_pairs(Vec::new()).status.is_none());
    }

    #[test]
    fn test_listing_serializes_as_map() {
        let mut listing = RecordListing::new();
        listing.insert(
            "id-1".to_string(),
            RecordSummary {
                name: "a".to_string(),
                status: "open".to_string(),
                created_at: "2024-01-01 00:00:00".to_string(),
            },
        );

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id-1": {"name": "a", "status": "open", "created_at": "2024-01-01 00:00:00"}
            })
        );
    }
}
