//! Read-only order access for the dashboard.

use crate::client::ApiClient;
use crate::client::envelope::decode_list;
use crate::entities::Order;
use crate::errors::Result;

/// Reads `GET orders`.
#[derive(Debug, Clone)]
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    /// Creates the service.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All orders, whatever the pagination envelope (`data.content`, `data.items`, `data`).
    ///
    /// # Errors
    /// Returns an error if the request fails or an order cannot be decoded.
    pub async fn index(&self) -> Result<Vec<Order>> {
        decode_list(self.client.get("orders").await?)
    }
}

/// Sum of the totals of delivered and paid orders.
#[must_use]
pub fn revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.is_settled())
        .map(|o| o.total_amount)
        .sum()
}
