use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::Query,
};

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest},
    entity::{
        categories::{ActiveModel, Column, Entity as Categories},
        products::{Column as ProdCol, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("category name must not be blank".into()));
    }

    let category = ActiveModel {
        name: Set(name.clone()),
        description: Set(payload.description),
        ..Default::default()
    }
    .insert(&state.orm)
    .await
    .map_err(|err| AppError::from_constraint(err, format!("category '{name}' already exists")))?;

    tracing::info!(category_id = category.id, name = %category.name, "category created");

    Ok(ApiResponse::success(
        "Category created",
        Category::from(category),
        Some(Meta::empty()),
    ))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = Categories::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    let meta = Meta::total(items.len() as u64);
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}

/// Deletes a category that no product references. Categories still in use
/// are left untouched and reported as a conflict.
///
/// The guarded delete runs first so the transaction owns the write lock
/// before the follow-up reads that explain a zero-row result.
pub async fn delete_category(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;

    let in_use = Query::select()
        .column(ProdCol::CategoryId)
        .from(Products)
        .and_where(ProdCol::CategoryId.eq(id))
        .to_owned();
    let deleted = Categories::delete_many()
        .filter(Column::Id.eq(id))
        .filter(Column::Id.not_in_subquery(in_use))
        .exec(&txn)
        .await
        .map_err(|err| AppError::from_constraint(err, format!("category {id} is in use")))?;

    if deleted.rows_affected == 0 {
        if Categories::find_by_id(id).one(&txn).await?.is_none() {
            return Err(AppError::NotFound(format!("Category {id}")));
        }
        let referenced = Products::find()
            .filter(ProdCol::CategoryId.eq(id))
            .count(&txn)
            .await?;
        tracing::warn!(category_id = id, referenced, "category delete rejected");
        return Err(AppError::Conflict(format!(
            "category {id} is referenced by {referenced} product(s)"
        )));
    }

    txn.commit().await?;
    tracing::info!(category_id = id, "category deleted");

    Ok(ApiResponse::success(
        "Category deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}
