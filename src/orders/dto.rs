use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo_types::{Order, OrderItem, OrderStatus};
use crate::auth::repo_types::Address;
use crate::products::repo_types::Product;

/// Checkout payload. Items and total come straight from the client cart and
/// are persisted as-is; there is no server-side re-pricing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub items: Vec<OrderItem>,
    pub total_amount: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdatedResponse {
    pub message: String,
    pub order: Order,
}

/// A line item with the current catalog record attached, for the order detail
/// view. `product` is `None` when the product has since been removed.
#[derive(Debug, Serialize)]
pub struct ExpandedOrderItem {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Option<Product>,
}

/// Order detail response with items expanded against the current catalog.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub items: Vec<ExpandedOrderItem>,
    pub total_amount: i64,
    pub payment_method: String,
    pub status: OrderStatus,
    pub user_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub order_date: OffsetDateTime,
}

impl OrderDetails {
    /// Pairs each stored item with its current product row, if any.
    pub fn expand(order: Order, products: Vec<Product>) -> Self {
        let items = order
            .items
            .0
            .into_iter()
            .map(|item| {
                let product = products.iter().find(|p| p.id == item.product_id).cloned();
                ExpandedOrderItem { item, product }
            })
            .collect();
        Self {
            id: order.id,
            customer_name: order.customer_name,
            email: order.email,
            phone: order.phone,
            address: order.address.0,
            items,
            total_amount: order.total_amount,
            payment_method: order.payment_method,
            status: order.status,
            user_id: order.user_id,
            order_date: order.order_date,
        }
    }
}
