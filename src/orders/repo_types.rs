use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::Address;

/// The only payment method the storefront supports; no capture happens.
pub const CASH_ON_DELIVERY: &str = "Cash on Delivery";

/// Order lifecycle states. Admin updates may move an order from any state to
/// any other; only membership in this set is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown order status: {s}"))
    }
}

/// A line item snapshot taken at checkout time. Name and price are copied
/// from the cart, not re-validated against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Order record in the database. Customer fields are a denormalized copy;
/// `user_id` is NULL for guest checkouts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: Json<Address>,
    pub items: Json<Vec<OrderItem>>,
    pub total_amount: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub user_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub order_date: OffsetDateTime,
}

#[cfg(test)]
mod status_tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_and_display_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_and_wrong_case() {
        assert!(OrderStatus::from_str("Refunded").is_err());
        assert!(OrderStatus::from_str("pending").is_err());
        assert!(OrderStatus::from_str("").is_err());
    }

    #[test]
    fn serializes_with_exact_capitalization() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"Cancelled\""
        );
    }
}
