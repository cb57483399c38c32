//! Order entity - read-only, only the dashboard looks at orders.

use super::fields;
use serde::Deserialize;
use serde_json::Value;

/// Order as served by `GET orders`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    id: Option<Value>,
    #[serde(rename = "orderStatus")]
    order_status_camel: Option<Value>,
    #[serde(rename = "order_status")]
    order_status_snake: Option<Value>,
    #[serde(rename = "paymentStatus")]
    payment_status_camel: Option<Value>,
    #[serde(rename = "payment_status")]
    payment_status_snake: Option<Value>,
    #[serde(rename = "totalAmount")]
    total_amount_camel: Option<Value>,
    #[serde(rename = "total_amount")]
    total_amount_snake: Option<Value>,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "OrderRecord")]
pub struct Order {
    /// Unique identifier
    pub id: i64,
    /// Fulfilment state, e.g. `DELIVERED`
    pub order_status: String,
    /// Payment state, e.g. `PAID`
    pub payment_status: String,
    /// Order total in VND
    pub total_amount: f64,
}

impl From<OrderRecord> for Order {
    fn from(raw: OrderRecord) -> Self {
        Self {
            id: fields::integer(raw.id.as_ref()).unwrap_or_default(),
            order_status: fields::text(fields::first(&[
                raw.order_status_camel.as_ref(),
                raw.order_status_snake.as_ref(),
            ]))
            .unwrap_or_default(),
            payment_status: fields::text(fields::first(&[
                raw.payment_status_camel.as_ref(),
                raw.payment_status_snake.as_ref(),
            ]))
            .unwrap_or_default(),
            total_amount: fields::number(fields::first(&[
                raw.total_amount_camel.as_ref(),
                raw.total_amount_snake.as_ref(),
            ]))
            .unwrap_or_default(),
        }
    }
}

impl Order {
    /// Delivered and paid: the order counts towards revenue.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.order_status == "DELIVERED" && self.payment_status == "PAID"
    }
}
