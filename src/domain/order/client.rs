//! Order sub-client — place and query orders.

use serde::Serialize;

use crate::client::BourseClient;

use super::{Order, OrderKind, OrderSide, SecurityKind};

/// Body for placing a new order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub owner_id: String,
    pub security_identifier: String,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub security_type: SecurityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    pub size: i64,
}

impl PlaceOrderRequest {
    /// A limit order.
    pub fn limit(
        owner_id: impl Into<String>,
        security_identifier: impl Into<String>,
        side: OrderSide,
        security_type: SecurityKind,
        limit: f64,
        size: i64,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            security_identifier: security_identifier.into(),
            side,
            kind: OrderKind::Limit,
            security_type,
            limit: Some(limit),
            size,
        }
    }

    /// A market order.
    pub fn market(
        owner_id: impl Into<String>,
        security_identifier: impl Into<String>,
        side: OrderSide,
        security_type: SecurityKind,
        size: i64,
    ) -> Self {
        Self {
            owner_id: owner_id.into(),
            security_identifier: security_identifier.into(),
            side,
            kind: OrderKind::Market,
            security_type,
            limit: None,
            size,
        }
    }
}

pub struct Orders<'a> {
    pub(crate) client: &'a BourseClient,
}

impl Orders<'_> {
    /// Open orders of the authenticated player.
    pub async fn list(&self) -> Vec<Order> {
        self.client.fetch.fetch_many("/api/orders").await
    }

    /// An order by id.
    pub async fn get(&self, id: &str) -> Option<Order> {
        let path = format!("/api/orders/{}", urlencoding::encode(id));
        self.client.fetch.fetch_one(&path).await
    }

    /// Place an order; the decoded order comes back on success.
    pub async fn place(&self, request: &PlaceOrderRequest) -> Option<Order> {
        self.client.fetch.post_one("/api/orders", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_request_wire_shape() {
        let request = PlaceOrderRequest::limit(
            "sa-9",
            "DE000A1EXCH9",
            OrderSide::Buy,
            SecurityKind::Stock,
            101.5,
            200,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["side"], "BUY");
        assert_eq!(json["type"], "LIMIT");
        assert_eq!(json["securityType"], "STOCK");
        assert_eq!(json["limit"], 101.5);
    }

    #[test]
    fn test_market_request_omits_limit() {
        let request = PlaceOrderRequest::market(
            "sa-9",
            "DE000A1EXCH9",
            OrderSide::Sell,
            SecurityKind::Bond,
            50,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "MARKET");
        assert!(json.get("limit").is_none());
    }
}
