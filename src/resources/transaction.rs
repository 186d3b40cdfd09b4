//! Payment transactions returned by `orders/{order_id}/transactions`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Initial authorization of payment.
    #[default]
    Authorization,
    /// Capture of previously authorized payment.
    Capture,
    /// Combined authorization and capture in one step.
    Sale,
    /// Cancellation of an authorization.
    Void,
    /// Return of funds to customer.
    Refund,
    /// A kind not listed here (e.g., `change` or `suggested_refund`).
    #[serde(other)]
    Unknown,
}

/// The status of a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Transaction is pending completion.
    #[default]
    Pending,
    /// Transaction failed.
    Failure,
    /// Transaction completed successfully.
    Success,
    /// Transaction encountered an error.
    Error,
    /// A status not listed here.
    #[serde(other)]
    Unknown,
}

/// A payment transaction for an order.
///
/// Transactions are immutable records of payment events.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The unique identifier of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the order this transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The kind of transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,

    /// The status of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,

    /// The transaction amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The currency code (e.g., "USD").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The payment gateway used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// The authorization code from the payment gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// A message describing the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The error code if the transaction failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// The ID of the parent transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// Whether this is a test transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// When the transaction was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the transaction was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
}
