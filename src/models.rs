//! Plain records for remote service types
//!
//! The service describes its entities as flat records; these mirror the
//! shapes the demos and tests page through. Field names follow the wire
//! format (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Inactive,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_template_id: Option<i64>,
    pub status: ProductStatus,
    #[serde(default)]
    pub last_modified_date_time: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(id: i64, name: String, product_template_id: Option<i64>) -> Self {
        Self {
            id,
            name,
            product_template_id,
            status: ProductStatus::Active,
            last_modified_date_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemCreativeAssociation {
    pub line_item_id: i64,
    pub creative_id: i64,
    #[serde(default)]
    pub status: Option<String>,
}

/// Response of an update call; `rval` is absent when nothing was updated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLineItemCreativeAssociationsResponse {
    #[serde(default)]
    pub rval: Option<Vec<LineItemCreativeAssociation>>,
}

impl UpdateLineItemCreativeAssociationsResponse {
    pub fn new(rval: Option<Vec<LineItemCreativeAssociation>>) -> Self {
        Self { rval }
    }

    pub fn rval(&self) -> &[LineItemCreativeAssociation] {
        self.rval.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_wire_names() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "name": "Homepage takeover",
            "productTemplateId": 42,
            "status": "ARCHIVED"
        }))
        .unwrap();

        assert_eq!(product.product_template_id, Some(42));
        assert_eq!(product.status, ProductStatus::Archived);
        assert_eq!(product.last_modified_date_time, None);
    }

    #[test]
    fn test_update_response_with_and_without_rval() {
        let response: UpdateLineItemCreativeAssociationsResponse =
            serde_json::from_value(json!({
                "rval": [{ "lineItemId": 1, "creativeId": 2, "status": "ACTIVE" }]
            }))
            .unwrap();
        assert_eq!(response.rval().len(), 1);
        assert_eq!(response.rval()[0].creative_id, 2);

        let empty: UpdateLineItemCreativeAssociationsResponse =
            serde_json::from_value(json!({})).unwrap();
        assert!(empty.rval().is_empty());
        assert_eq!(empty, UpdateLineItemCreativeAssociationsResponse::new(None));
    }
}
