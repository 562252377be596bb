use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::sales::{CreateSaleRequest, SaleList, SaleWithItems},
    error::AppResult,
    extract::{AppJson, AppPath},
    response::ApiResponse,
    services::sale_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sales).post(create_sale))
        .route("/{id}", get(get_sale))
}

#[utoipa::path(
    post,
    path = "/sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale recorded with computed totals", body = ApiResponse<SaleWithItems>),
        (status = 404, description = "Unknown product"),
        (status = 422, description = "Empty sale, bad quantity, price or discount"),
        (status = 500, description = "Storage failure, nothing was written"),
    ),
    tag = "Sales"
)]
pub async fn create_sale(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSaleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<SaleWithItems>>)> {
    let resp = sale_service::create_sale(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/sales",
    responses(
        (status = 200, description = "List sales", body = ApiResponse<SaleList>)
    ),
    tag = "Sales"
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SaleList>>> {
    let resp = sale_service::list_sales(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/sales/{id}",
    params(
        ("id" = i32, Path, description = "Sale ID")
    ),
    responses(
        (status = 200, description = "Sale with its items", body = ApiResponse<SaleWithItems>),
        (status = 404, description = "Sale not found"),
    ),
    tag = "Sales"
)]
pub async fn get_sale(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<ApiResponse<SaleWithItems>>> {
    let resp = sale_service::get_sale(&state, id).await?;
    Ok(Json(resp))
}
