#![allow(dead_code)]

use pos_backend::{
    db::{create_orm_conn, run_migrations},
    dto::{categories::CreateCategoryRequest, products::CreateProductRequest},
    models::{Category, Product, ProductType},
    services::{category_service, product_service},
    state::AppState,
};

// Each call gets its own private in-memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:", 1).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    let resp = category_service::create_category(
        state,
        CreateCategoryRequest {
            name: name.to_string(),
            description: format!("{name} items"),
        },
    )
    .await?;
    Ok(resp.data.expect("category data"))
}

pub async fn create_product(
    state: &AppState,
    category_id: i32,
    name: &str,
    price: f64,
) -> anyhow::Result<Product> {
    let resp = product_service::create_product(
        state,
        CreateProductRequest {
            name: name.to_string(),
            price,
            category_id,
            product_type: ProductType::Product,
        },
    )
    .await?;
    Ok(resp.data.expect("product data"))
}
