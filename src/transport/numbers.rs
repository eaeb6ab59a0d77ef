//! Numbers wire shapes (camelCase field names on the wire).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    Mobile,
    Local,
    TollFree,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveNumber {
    pub phone_number: String,
    pub region_code: String,
    #[serde(rename = "type")]
    pub number_type: NumberType,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub capability: Vec<String>,
    #[serde(default)]
    pub next_charge_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableNumber {
    pub phone_number: String,
    pub region_code: String,
    #[serde(rename = "type")]
    pub number_type: NumberType,
    #[serde(default)]
    pub capability: Vec<String>,
}

/// One page of the active-number listing. Pages are one-based; `totalItems`
/// spans all pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActiveNumbersResponse {
    pub page_number: u64,
    pub page_size: u64,
    pub total_items: u64,
    #[serde(default)]
    pub active_numbers: Vec<ActiveNumber>,
}

/// Search result for rentable numbers; not paginated by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAvailableNumbersResponse {
    #[serde(default)]
    pub available_numbers: Vec<AvailableNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_number_decodes_camel_case_fields() {
        let json = r#"
        {
          "phoneNumber": "+12025550134",
          "regionCode": "US",
          "type": "LOCAL",
          "displayName": "support line",
          "capability": ["SMS", "VOICE"],
          "nextChargeDate": "2024-05-01T00:00:00Z"
        }
        "#;

        let number: ActiveNumber = serde_json::from_str(json).unwrap();
        assert_eq!(number.phone_number, "+12025550134");
        assert_eq!(number.number_type, NumberType::Local);
        assert_eq!(number.capability, vec!["SMS", "VOICE"]);
        assert_eq!(number.display_name.as_deref(), Some("support line"));
    }

    #[test]
    fn list_page_decodes_one_based_pagination_fields() {
        let json = r#"
        {
          "pageNumber": 1,
          "pageSize": 2,
          "totalItems": 3,
          "activeNumbers": [
            {"phoneNumber": "+1", "regionCode": "US", "type": "MOBILE"},
            {"phoneNumber": "+2", "regionCode": "US", "type": "TOLL_FREE"}
          ]
        }
        "#;

        let page: ListActiveNumbersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_items, 3);
        assert_eq!(page.active_numbers[1].number_type, NumberType::TollFree);
    }

    #[test]
    fn available_numbers_default_to_empty() {
        let page: ListAvailableNumbersResponse = serde_json::from_str("{}").unwrap();
        assert!(page.available_numbers.is_empty());
    }
}
