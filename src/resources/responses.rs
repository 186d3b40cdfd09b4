//! Envelope types wrapping the records in list and singleton responses.

use serde::{Deserialize, Serialize};

use super::{Order, Product, Transaction};

/// Response to `GET orders`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrdersResponse {
    /// The returned orders.
    pub orders: Vec<Order>,
}

/// Response to `GET orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderResponse {
    /// The returned order.
    pub order: Order,
}

/// Response to `GET orders/{id}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TransactionsResponse {
    /// The returned transactions.
    pub transactions: Vec<Transaction>,
}

/// Response to any `count` endpoint (e.g., `products/count`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CountResponse {
    /// The number of matching records.
    pub count: u64,
}

/// Response to `GET products`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductsResponse {
    /// The returned products.
    pub products: Vec<Product>,
}

/// Response to `GET products/{id}`, `POST products` and `PUT products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductResponse {
    /// The returned product.
    pub product: Product,
}
