//! SMS batch wire shapes (snake_case field names on the wire).

use serde::{Deserialize, Serialize};

/// Batch send request, discriminated by the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum BatchRequest {
    #[serde(rename = "mt_text")]
    Text(TextBatchRequest),
    #[serde(rename = "mt_binary")]
    Binary(BinaryBatchRequest),
    #[serde(rename = "mt_media")]
    Media(MediaBatchRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBatchRequest {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_report: Option<DeliveryReportKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryBatchRequest {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Base64-encoded message payload.
    pub body: String,
    /// Base64-encoded user data header.
    pub udh: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaBatchRequest {
    pub to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    pub body: MediaBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBody {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryReportKind {
    None,
    Summary,
    Full,
    PerRecipient,
}

/// Batch resource returned by the API, discriminated by the same `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Batch {
    #[serde(rename = "mt_text")]
    Text(TextBatch),
    #[serde(rename = "mt_binary")]
    Binary(BinaryBatch),
    #[serde(rename = "mt_media")]
    Media(MediaBatch),
}

impl Batch {
    /// Batch id regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            Self::Text(batch) => &batch.id,
            Self::Binary(batch) => &batch.id,
            Self::Media(batch) => &batch.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextBatch {
    pub id: String,
    pub to: Vec<String>,
    #[serde(default)]
    pub from: Option<String>,
    pub body: String,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BinaryBatch {
    pub id: String,
    pub to: Vec<String>,
    #[serde(default)]
    pub from: Option<String>,
    pub body: String,
    pub udh: String,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaBatch {
    pub id: String,
    pub to: Vec<String>,
    #[serde(default)]
    pub from: Option<String>,
    pub body: MediaBody,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of the batch listing. Pages are zero-based and `count` is the
/// total number of batches across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListBatchesResponse {
    pub page: u64,
    pub page_size: u64,
    pub count: u64,
    #[serde(default)]
    pub batches: Vec<Batch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_batch_request_carries_type_tag() {
        let request = BatchRequest::Text(TextBatchRequest {
            to: vec!["+15551234567".to_owned()],
            from: Some("+15550000000".to_owned()),
            body: "hello".to_owned(),
            delivery_report: Some(DeliveryReportKind::Summary),
        });

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "mt_text");
        assert_eq!(json["body"], "hello");
        assert_eq!(json["delivery_report"], "summary");
    }

    #[test]
    fn batch_decodes_by_type_tag() {
        let json = r#"
        {
          "id": "01FC66621XXXXX119Z8PMV1QPQ",
          "type": "mt_text",
          "to": ["+15551234567"],
          "from": "+15550000000",
          "body": "hello",
          "created_at": "2021-08-03T07:49:00.301Z"
        }
        "#;

        let batch: Batch = serde_json::from_str(json).unwrap();
        match &batch {
            Batch::Text(text) => {
                assert_eq!(text.body, "hello");
                assert!(!text.canceled);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(batch.id(), "01FC66621XXXXX119Z8PMV1QPQ");
    }

    #[test]
    fn binary_batch_decodes_udh() {
        let json = r#"
        {
          "id": "binary-1",
          "type": "mt_binary",
          "to": ["+15551234567"],
          "body": "aGVsbG8=",
          "udh": "0605040b8423f0"
        }
        "#;

        let batch: Batch = serde_json::from_str(json).unwrap();
        assert!(matches!(batch, Batch::Binary(ref b) if b.udh == "0605040b8423f0"));
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let json = r#"{"id": "x", "type": "mt_unknown", "to": [], "body": ""}"#;
        assert!(serde_json::from_str::<Batch>(json).is_err());
    }

    #[test]
    fn list_page_decodes_counts() {
        let json = r#"
        {
          "page": 0,
          "page_size": 30,
          "count": 2,
          "batches": [
            {"id": "a", "type": "mt_text", "to": ["+1"], "body": "x"},
            {"id": "b", "type": "mt_text", "to": ["+2"], "body": "y"}
          ]
        }
        "#;

        let page: ListBatchesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.count, 2);
        assert_eq!(page.batches.len(), 2);
    }
}
