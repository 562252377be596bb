mod common;

use pos_backend::{
    dto::{
        categories::CreateCategoryRequest,
        products::CreateProductRequest,
        sales::{CreateSaleRequest, SaleItemRequest},
    },
    entity::{Categories, Products},
    error::AppError,
    models::ProductType,
    services::{category_service, product_service, sale_service},
};
use sea_orm::{EntityTrait, PaginatorTrait};

use common::{create_category, create_product, setup_state};

#[tokio::test]
async fn duplicate_category_name_conflicts() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let first = create_category(&state, "Electronics").await?;

    let err = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Electronics".into(),
            description: "second attempt".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");

    let listed = category_service::list_categories(&state)
        .await?
        .data
        .expect("categories")
        .items;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].description, "Electronics items");
    Ok(())
}

#[tokio::test]
async fn blank_category_name_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let err = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "   ".into(),
            description: String::new(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(Categories::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_missing_category_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    create_category(&state, "Clothing").await?;

    let err = category_service::delete_category(&state, 404)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(Categories::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn referenced_category_cannot_be_deleted() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let category = create_category(&state, "Clothing").await?;
    let shirt = create_product(&state, category.id, "Shirt", 250.0).await?;

    let err = category_service::delete_category(&state, category.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(Categories::find().count(&state.orm).await?, 1);

    product_service::delete_product(&state, shirt.id).await?;
    category_service::delete_category(&state, category.id).await?;
    assert_eq!(Categories::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn product_requires_existing_category() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let err = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Orphan".into(),
            price: 1.0,
            category_id: 77,
            product_type: ProductType::Product,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(Products::find().count(&state.orm).await?, 0);
    Ok(())
}

#[tokio::test]
async fn product_price_must_be_non_negative() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let category = create_category(&state, "Professional").await?;

    for price in [-0.01, f64::INFINITY] {
        let err = product_service::create_product(
            &state,
            CreateProductRequest {
                name: "Consultation".into(),
                price,
                category_id: category.id,
                product_type: ProductType::Service,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    let free = create_product(&state, category.id, "Free advice", 0.0).await?;
    assert_eq!(free.price, 0.0);
    Ok(())
}

#[tokio::test]
async fn products_round_trip_through_catalog() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let category = create_category(&state, "Electronics").await?;

    let combo = product_service::create_product(
        &state,
        CreateProductRequest {
            name: "Laptop + Setup".into(),
            price: 16000.0,
            category_id: category.id,
            product_type: ProductType::Combo,
        },
    )
    .await?
    .data
    .expect("product");

    let fetched = product_service::get_product(&state, combo.id)
        .await?
        .data
        .expect("product");
    assert_eq!(fetched.product_type, ProductType::Combo);
    assert_eq!(fetched.category_id, category.id);

    let listed = product_service::list_products(&state).await?;
    assert_eq!(listed.meta.and_then(|meta| meta.total), Some(1));

    let err = product_service::get_product(&state, combo.id + 1)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn sold_product_cannot_be_deleted() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let category = create_category(&state, "Food & Beverage").await?;
    let coffee = create_product(&state, category.id, "Premium Coffee", 45.0).await?;

    sale_service::create_sale(
        &state,
        CreateSaleRequest {
            items: vec![SaleItemRequest {
                product_id: coffee.id,
                quantity: 1,
                unit_price: 45.0,
            }],
            discount_amount: 0.0,
            customer_name: None,
            payment_method: None,
        },
    )
    .await?;

    let err = product_service::delete_product(&state, coffee.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(Products::find().count(&state.orm).await?, 1);

    let err = product_service::delete_product(&state, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}
