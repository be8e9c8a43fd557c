//! Integration tests for the fetch adapter against a mock HTTP server.
//!
//! Verifies the single-vs-multi contract: a failed single fetch is `None`,
//! a failed multi fetch is an empty list, and neither lets an error escape.

use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use bourse_sdk::prelude::*;

/// Bind a router on an ephemeral port and return its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> BourseClient {
    BourseClient::builder()
        .base_url(base_url)
        .auth_token("test-token")
        .partner_id("partner-7")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_single_fetch_404_returns_none() {
    // No routes at all: everything is a 404.
    let base_url = spawn_server(Router::new()).await;
    let client = client_for(&base_url);

    let account = client.accounts().get("missing").await;
    assert!(account.is_none());
}

#[tokio::test]
async fn test_multi_fetch_404_returns_empty_list() {
    let base_url = spawn_server(Router::new()).await;
    let client = client_for(&base_url);

    let companies = client.companies().list().await;
    assert!(companies.is_empty());
}

#[tokio::test]
async fn test_multi_fetch_empty_body_returns_empty_list() {
    let app = Router::new().route("/api/companies", get(|| async { Json(json!([])) }));
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let companies = client.companies().list().await;
    assert_eq!(companies.len(), 0);
}

#[tokio::test]
async fn test_single_fetch_decodes_entity_with_null_field() {
    let app = Router::new().route(
        "/api/bankaccounts",
        get(|| async { Json(json!({"cash": null, "id": "x1"})) }),
    );
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let account = client.accounts().own().await.unwrap();
    assert_eq!(account.id.get().map(String::as_str), Some("x1"));
    assert!(account.cash.is_empty());
}

#[tokio::test]
async fn test_multi_fetch_decodes_elements() {
    let app = Router::new().route(
        "/api/bonds",
        get(|| async {
            Json(json!([
                {"id": "b-1", "name": "Staatsanleihe 2030", "faceValue": 100, "interestRate": 0.035},
                {"id": "b-2", "name": null, "faceValue": null, "interestRate": null}
            ]))
        }),
    );
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let bonds = client.bonds().list().await;
    assert_eq!(bonds.len(), 2);
    assert_eq!(bonds[0].face_value.get(), Some(&100.0));
    assert!(bonds[1].name.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_absorbed() {
    let app = Router::new().route("/api/orders/o-1", get(|| async { "not json" }));
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let order = client.orders().get("o-1").await;
    assert!(order.is_none());
}

#[tokio::test]
async fn test_server_error_is_absorbed() {
    let app = Router::new().route(
        "/api/pricespreads",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let spreads = client.prices().list().await;
    assert!(spreads.is_empty());
}

#[tokio::test]
async fn test_auth_headers_attached_to_requests() {
    async fn guarded(headers: HeaderMap) -> impl IntoResponse {
        let token_ok = headers
            .get("authorization")
            .is_some_and(|v| v == "Bearer test-token");
        let partner_ok = headers.get("x-partner-id").is_some_and(|v| v == "partner-7");
        if token_ok && partner_ok {
            Json(json!({"id": "c-1", "name": "Mondbahn AG"})).into_response()
        } else {
            StatusCode::UNAUTHORIZED.into_response()
        }
    }

    let app = Router::new().route("/api/companies/c-1", get(guarded));
    let base_url = spawn_server(app).await;

    let company = client_for(&base_url).companies().get("c-1").await;
    assert!(company.is_some());

    // Without credentials the same endpoint rejects, and the adapter
    // absorbs the 401 into a plain None.
    let anonymous = BourseClient::builder().base_url(&base_url).build().unwrap();
    assert!(anonymous.companies().get("c-1").await.is_none());
}

#[tokio::test]
async fn test_place_order_posts_and_decodes() {
    async fn place(Json(body): Json<Value>) -> Json<Value> {
        Json(json!({
            "id": "o-99",
            "securityIdentifier": body["securityIdentifier"],
            "side": body["side"],
            "type": body["type"],
            "securityType": body["securityType"],
            "limit": body["limit"],
            "size": body["size"],
            "executedSize": 0,
            "created": 1700000000000i64,
            "ownerId": body["ownerId"]
        }))
    }

    let app = Router::new().route("/api/orders", post(place));
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let request = PlaceOrderRequest::limit(
        "sa-9",
        "DE000A1EXCH9",
        OrderSide::Buy,
        SecurityKind::Stock,
        101.5,
        200,
    );
    let order = client.orders().place(&request).await.unwrap();

    assert_eq!(order.id.get().map(String::as_str), Some("o-99"));
    assert_eq!(order.side.get(), Some(&OrderSide::Buy));
    assert_eq!(order.open_size(), Some(200));
}

#[tokio::test]
async fn test_portfolio_fetch_with_nested_list() {
    let app = Router::new().route(
        "/api/securitiesaccounts/sa-9/portfolio",
        get(|| async {
            Json(json!({
                "id": "sa-9",
                "positions": [
                    {"securityIdentifier": "DE000A1EXCH9", "securityType": "STOCK", "amount": 120}
                ]
            }))
        }),
    );
    let base_url = spawn_server(app).await;
    let client = client_for(&base_url);

    let portfolio = client.portfolios().of_account("sa-9").await.unwrap();
    assert_eq!(portfolio.positions().len(), 1);
    assert_eq!(portfolio.positions()[0].amount.get(), Some(&120));
}
