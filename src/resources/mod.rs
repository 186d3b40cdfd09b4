//! Typed shapes of the REST Admin API responses the client knows about.
//!
//! The client itself returns raw bytes; decode them into these types with
//! [`HttpResponse::json`](crate::clients::HttpResponse::json). Every record
//! field is optional and unknown JSON fields are ignored.
//!
//! | Endpoint | Type |
//! |----------|------|
//! | `orders` | [`OrdersResponse`] |
//! | `orders/{id}` | [`OrderResponse`] |
//! | `orders/{id}/transactions` | [`TransactionsResponse`] |
//! | `products` | [`ProductsResponse`] |
//! | `products/{id}` | [`ProductResponse`] |
//! | `*/count` | [`CountResponse`] |

mod order;
mod product;
mod responses;
mod transaction;

pub use order::{FinancialStatus, FulfillmentStatus, LineItem, Order};
pub use product::{Product, ProductStatus, ProductVariant};
pub use responses::{
    CountResponse, OrderResponse, OrdersResponse, ProductResponse, ProductsResponse,
    TransactionsResponse,
};
pub use transaction::{Transaction, TransactionKind, TransactionStatus};
