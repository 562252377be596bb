use pos_backend::routes::health::{health_check, root};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn root_announces_service() {
    let response = root().await;
    let data = response.0.data.expect("root data");
    assert_eq!(data.message, "POS System API");
}
