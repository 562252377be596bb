mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use pos_backend::routes::{App, create_app};
use serde_json::{Value, json};
use tower::ServiceExt;

use common::setup_state;

async fn send(app: &App, request: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn checkout_over_http() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        post_json(
            "/categories",
            json!({ "name": "Food & Beverage", "description": "Food and drink items" }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = body["data"]["id"].as_i64().expect("category id");

    let mut product_ids = Vec::new();
    for (name, price) in [("Coffee", 10.0), ("Muffin", 5.0)] {
        let (status, body) = send(
            &app,
            post_json(
                "/products",
                json!({
                    "name": name,
                    "price": price,
                    "category_id": category_id,
                    "product_type": "product"
                }),
            ),
        )
        .await?;
        assert_eq!(status, StatusCode::CREATED);
        product_ids.push(body["data"]["id"].as_i64().expect("product id"));
    }

    let (status, body) = send(
        &app,
        post_json(
            "/sales",
            json!({
                "items": [
                    { "product_id": product_ids[0], "quantity": 2, "unit_price": 10.0 },
                    { "product_id": product_ids[1], "quantity": 1, "unit_price": 5.0 }
                ],
                "discount_amount": 5.0,
                "customer_name": "John Doe"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let sale = &body["data"];
    assert!(sale["id"].as_i64().is_some());
    assert_eq!(sale["vat_amount"], json!(3.0));
    assert_eq!(sale["total_amount"], json!(23.0));
    assert_eq!(sale["payment_method"], json!("cash"));
    assert_eq!(sale["items"].as_array().map(Vec::len), Some(2));

    let (status, body) = send(&app, get("/sales")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["meta"]["total"], json!(1));

    let sale_id = sale["id"].as_i64().expect("sale id");
    let (status, body) = send(&app, get(&format!("/sales/{sale_id}"))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subtotal"], json!(25.0));
    Ok(())
}

#[tokio::test]
async fn sale_errors_map_to_status_codes() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, post_json("/sales", json!({ "items": [] }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let (status, _) = send(
        &app,
        post_json(
            "/sales",
            json!({ "items": [{ "product_id": 1, "quantity": 1, "unit_price": 1.0 }] }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn category_conflict_and_missing_delete() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);
    let payload = json!({ "name": "Clothing", "description": "Apparel" });

    let (status, _) = send(&app, post_json("/categories", payload.clone())).await?;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, post_json("/categories", payload)).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, delete("/categories/999")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/categories")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, delete("/categories/1")).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn settings_default_then_upsert() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, get("/settings/vat_rate")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "key": "vat_rate", "value": "15" }));

    let request = Request::builder()
        .method("POST")
        .uri("/settings?key=vat_rate&value=20")
        .body(Body::empty())?;
    let (status, _) = send(&app, request).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/settings/vat_rate")).await?;
    assert_eq!(body["data"]["value"], json!("20"));
    Ok(())
}

#[tokio::test]
async fn analytics_stubs_and_fallback() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(&app, get("/analytics/sales-by-category")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["Electronics"], json!(35));

    let (status, body) = send(&app, get("/analytics/monthly-sales")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["data"][0], json!({ "month": "Jan", "sales": 45000, "orders": 120 }));

    let (status, body) = send(&app, get("/nowhere")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], json!("/nowhere"));
    Ok(())
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_routes() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);

    let (status, body) = send(
        &app,
        post_json("/categories/", json!({ "name": "Services" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = body["data"]["id"].as_i64().expect("category id");

    let (status, body) = send(
        &app,
        post_json(
            "/products/",
            json!({
                "name": "Consultation",
                "price": 500.0,
                "category_id": category_id,
                "product_type": "service"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let product_id = body["data"]["id"].as_i64().expect("product id");

    let (status, body) = send(
        &app,
        post_json(
            "/sales/",
            json!({
                "items": [{ "product_id": product_id, "quantity": 1, "unit_price": 500.0 }],
                "payment_method": "card"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["total_amount"], json!(575.0));

    for uri in ["/categories/", "/products/", "/sales/"] {
        let (status, body) = send(&app, get(uri)).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1), "{uri}");
    }

    let (status, body) = send(&app, get("/")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], json!("POS System API"));
    Ok(())
}

#[tokio::test]
async fn malformed_requests_use_error_envelope() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);
    let (_, body) = send(&app, post_json("/categories", json!({ "name": "Gadgets" }))).await?;
    let category_id = body["data"]["id"].as_i64().expect("category id");

    let (status, body) = send(
        &app,
        post_json(
            "/products",
            json!({
                "name": "Widget",
                "price": 1.0,
                "category_id": category_id,
                "product_type": "gadget"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let (status, body) = send(
        &app,
        post_json(
            "/sales",
            json!({
                "items": [{ "product_id": 1, "quantity": 1, "unit_price": 1.0 }],
                "payment_method": "cheque"
            }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let (status, body) = send(
        &app,
        post_json(
            "/sales",
            json!({ "items": [{ "product_id": 1, "quantity": 1.5, "unit_price": 1.0 }] }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let (status, body) = send(&app, get("/products/abc")).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let request = Request::builder()
        .method("POST")
        .uri("/settings?key=vat_rate")
        .body(Body::empty())?;
    let (status, body) = send(&app, request).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn overflowing_amounts_are_rejected() -> anyhow::Result<()> {
    let app = create_app(setup_state().await?);
    let (_, body) = send(&app, post_json("/categories", json!({ "name": "Electronics" }))).await?;
    let category_id = body["data"]["id"].as_i64().expect("category id");
    let (_, body) = send(
        &app,
        post_json(
            "/products",
            json!({
                "name": "Laptop Pro",
                "price": 15000.0,
                "category_id": category_id,
                "product_type": "product"
            }),
        ),
    )
    .await?;
    let product_id = body["data"]["id"].as_i64().expect("product id");

    let (status, body) = send(
        &app,
        post_json(
            "/sales",
            json!({ "items": [{ "product_id": product_id, "quantity": 2, "unit_price": 1e308 }] }),
        ),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["data"]["error"].as_str().is_some());

    let (_, body) = send(&app, get("/sales")).await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    Ok(())
}
