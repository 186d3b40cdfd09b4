//! Product records returned by the `products` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// The product is ready to sell.
    #[default]
    Active,
    /// The product is no longer being sold.
    Archived,
    /// The product is not yet ready to sell.
    Draft,
    /// A status not listed here (e.g., `unlisted`).
    #[serde(other)]
    Unknown,
}

/// A variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the product this variant belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,

    /// The variant title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The price as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The position in the variant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,

    /// The available inventory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,

    /// The first option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option1: Option<String>,

    /// The second option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option2: Option<String>,

    /// The third option value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option3: Option<String>,

    /// When the variant was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the variant was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product in the store catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// The unique identifier of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The product title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The description, in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    /// The product vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// The product type used for filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// The URL-friendly handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// The publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// When the product was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the product was published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// The variants of the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}
