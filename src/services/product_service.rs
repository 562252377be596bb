use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait, sea_query::Query,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList},
    entity::{
        categories::Entity as Categories,
        products::{ActiveModel, Column, Entity as Products},
        sale_items::{Column as SaleItemCol, Entity as SaleItems},
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::total(items.len() as u64);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;
    Ok(ApiResponse::success("Product", Product::from(product), None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("product name must not be blank".into()));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::Validation(
            "price must be a non-negative amount".into(),
        ));
    }

    let category_id = payload.category_id;
    if Categories::find_by_id(category_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound(format!("Category {category_id}")));
    }

    // Single autocommit insert; a category removed since the check above
    // surfaces as a foreign key failure.
    let product = ActiveModel {
        name: Set(name),
        price: Set(payload.price),
        category_id: Set(category_id),
        product_type: Set(payload.product_type),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            AppError::NotFound(format!("Category {category_id}"))
        }
        _ => AppError::Storage(err),
    })?;

    tracing::info!(product_id = product.id, category_id = product.category_id, "product created");

    Ok(ApiResponse::success(
        "Product created",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

/// Products that appear on a recorded sale cannot be removed; sales are
/// immutable and their lines must keep resolving.
pub async fn delete_product(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;

    let sold_lines = Query::select()
        .column(SaleItemCol::ProductId)
        .from(SaleItems)
        .and_where(SaleItemCol::ProductId.eq(id))
        .to_owned();
    let deleted = Products::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::Id.not_in_subquery(sold_lines))
        .exec(&txn)
        .await
        .map_err(|err| AppError::from_constraint(err, format!("product {id} is in use")))?;

    if deleted.rows_affected == 0 {
        if Products::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Product {id}")));
        }
        let sold = SaleItems::find()
            .filter(SaleItemCol::ProductId.eq(id))
            .count(&txn)
            .await?;
        tracing::warn!(product_id = id, sold, "product delete rejected");
        return Err(AppError::Conflict(format!(
            "product {id} appears on {sold} sale item(s)"
        )));
    }

    txn.commit().await?;
    tracing::info!(product_id = id, "product deleted");

    Ok(ApiResponse::success(
        "Product deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}
