//! Decoding of realistic Admin API payloads into the typed response shapes.

use serde_json::json;

use shopify_rest::clients::HttpResponse;
use shopify_rest::resources::{
    CountResponse, FinancialStatus, FulfillmentStatus, OrdersResponse, ProductResponse,
    ProductStatus, TransactionKind, TransactionsResponse,
};
use std::collections::HashMap;

fn response_with(body: &serde_json::Value) -> HttpResponse {
    HttpResponse::new(200, HashMap::new(), serde_json::to_vec(body).unwrap())
}

#[test]
fn test_product_body_decodes_to_the_submitted_values() {
    let submitted = json!({
        "product": {
            "title": "Burton Custom Freestyle 151",
            "body_html": "<strong>Good snowboard!</strong>",
            "vendor": "Burton",
            "product_type": "Snowboard",
            "status": "draft",
            "tags": "Barnes & Noble, Big Air, John's Fav"
        }
    });

    let decoded: ProductResponse = response_with(&submitted).json().unwrap();
    let product = decoded.product;

    assert_eq!(product.title.as_deref(), Some("Burton Custom Freestyle 151"));
    assert_eq!(product.body_html.as_deref(), Some("<strong>Good snowboard!</strong>"));
    assert_eq!(product.vendor.as_deref(), Some("Burton"));
    assert_eq!(product.product_type.as_deref(), Some("Snowboard"));
    assert_eq!(product.status, Some(ProductStatus::Draft));
    assert_eq!(product.tags.as_deref(), Some("Barnes & Noble, Big Air, John's Fav"));

    // Re-encoding yields the same map
    assert_eq!(
        serde_json::to_value(ProductResponse { product }).unwrap(),
        submitted
    );
}

#[test]
fn test_orders_listing_decodes() {
    let body = json!({
        "orders": [
            {
                "id": 450789469,
                "name": "#1001",
                "email": "bob.norman@mail.example.com",
                "financial_status": "partially_refunded",
                "fulfillment_status": null,
                "total_price": "598.94",
                "currency": "USD",
                "created_at": "2008-01-10T11:00:00-05:00",
                "line_items": [
                    {"id": 466157049, "title": "IPod Nano - 8gb", "quantity": 1, "price": "199.00"}
                ]
            },
            {"id": 450789470, "financial_status": "paid"}
        ]
    });

    let orders: OrdersResponse = response_with(&body).json().unwrap();

    assert_eq!(orders.orders.len(), 2);
    let first = &orders.orders[0];
    assert_eq!(first.financial_status, Some(FinancialStatus::PartiallyRefunded));
    assert!(first.fulfillment_status.is_none());
    assert_eq!(first.line_items.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        first.created_at.map(|at| at.to_rfc3339()),
        Some("2008-01-10T16:00:00+00:00".to_string())
    );
    assert_eq!(orders.orders[1].financial_status, Some(FinancialStatus::Paid));
}

#[test]
fn test_transactions_listing_decodes() {
    let body = json!({
        "transactions": [
            {"id": 1, "order_id": 450789469, "kind": "authorization", "status": "success", "amount": "598.94"},
            {"id": 2, "order_id": 450789469, "kind": "capture", "status": "success", "parent_id": 1}
        ]
    });

    let transactions: TransactionsResponse = response_with(&body).json().unwrap();

    let kinds: Vec<_> = transactions
        .transactions
        .iter()
        .map(|transaction| transaction.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![Some(TransactionKind::Authorization), Some(TransactionKind::Capture)]
    );
}

#[test]
fn test_transactions_with_unlisted_kind_still_decode() {
    let body = r#"{"transactions":[
        {"id":1,"kind":"sale","status":"success","amount":"10.00"},
        {"id":2,"kind":"change","status":"success","amount":"-2.00"}
    ]}"#;

    let transactions: TransactionsResponse = serde_json::from_str(body).unwrap();

    assert_eq!(transactions.transactions.len(), 2);
    assert_eq!(transactions.transactions[0].kind, Some(TransactionKind::Sale));
    assert_eq!(transactions.transactions[1].kind, Some(TransactionKind::Unknown));
    assert_eq!(transactions.transactions[1].amount.as_deref(), Some("-2.00"));
}

#[test]
fn test_unlisted_statuses_still_decode() {
    let product: ProductResponse =
        serde_json::from_value(json!({"product": {"id": 7, "status": "unlisted"}})).unwrap();
    assert_eq!(product.product.id, Some(7));
    assert_eq!(product.product.status, Some(ProductStatus::Unknown));

    let orders: OrdersResponse = serde_json::from_value(json!({
        "orders": [{"id": 1, "financial_status": "something_new", "fulfillment_status": "in_progress"}]
    }))
    .unwrap();
    assert_eq!(orders.orders[0].financial_status, Some(FinancialStatus::Unknown));
    assert_eq!(orders.orders[0].fulfillment_status, Some(FulfillmentStatus::Unknown));
}

#[test]
fn test_count_decodes_and_error_body_does_not() {
    let count: CountResponse = response_with(&json!({"count": 2})).json().unwrap();
    assert_eq!(count.count, 2);

    let error = HttpResponse::new(404, HashMap::new(), br#"{"errors":"Not Found"}"#.to_vec());
    assert!(error.json::<CountResponse>().is_err());
    assert_eq!(error.text(), r#"{"errors":"Not Found"}"#);
}
