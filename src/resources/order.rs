//! Order records returned by the `orders` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The financial status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    /// Payment is pending.
    #[default]
    Pending,
    /// Payment has been authorized but not captured.
    Authorized,
    /// Payment has been partially paid.
    PartiallyPaid,
    /// Payment has been fully captured.
    Paid,
    /// Payment has been partially refunded.
    PartiallyRefunded,
    /// Payment has been fully refunded.
    Refunded,
    /// Payment authorization has been voided.
    Voided,
    /// Payment authorization expired before capture.
    Expired,
    /// A status not listed here.
    #[serde(other)]
    Unknown,
}

/// The fulfillment status of an order.
///
/// Unfulfilled orders carry `null`, which maps to `None`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// All line items have been fulfilled.
    Fulfilled,
    /// Some line items have been fulfilled.
    Partial,
    /// Items were restocked.
    Restocked,
    /// A status not listed here.
    #[serde(other)]
    Unknown,
}

/// A line item in an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LineItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The ID of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The title of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The title of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,

    /// The quantity of items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// The price per item as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The SKU of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The vendor of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Whether the item requires shipping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,

    /// Whether the item is taxable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,

    /// The fulfillment status of this line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
}

/// An order placed in the store.
///
/// Monetary amounts are decimal strings, exactly as Shopify sends them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The unique identifier of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order name (e.g., "#1001").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The order number (integer portion of name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// When the order was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the order was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    /// When the order was closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,

    /// When the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// The reason the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    /// The financial status of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// The fulfillment status of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// The three-letter currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The sum of all line item prices, discounts, shipping and taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// The price of the order before shipping and taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,

    /// The sum of all taxes applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    /// The total discounts applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,

    /// The total weight in grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,

    /// Whether this is a test order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// An optional note attached to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The line items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
}
