use axum::{Json, Router, routing::get};

use crate::{
    dto::analytics::{MonthlySalesList, SalesByCategory},
    error::AppResult,
    response::ApiResponse,
    services::analytics_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales-by-category", get(sales_by_category))
        .route("/monthly-sales", get(monthly_sales))
}

#[utoipa::path(
    get,
    path = "/analytics/sales-by-category",
    responses(
        (status = 200, description = "Share of sales per category (static placeholder)", body = ApiResponse<SalesByCategory>)
    ),
    tag = "Analytics"
)]
pub async fn sales_by_category() -> AppResult<Json<ApiResponse<SalesByCategory>>> {
    let resp = analytics_service::sales_by_category().await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/analytics/monthly-sales",
    responses(
        (status = 200, description = "Monthly sales (static placeholder)", body = ApiResponse<MonthlySalesList>)
    ),
    tag = "Analytics"
)]
pub async fn monthly_sales() -> AppResult<Json<ApiResponse<MonthlySalesList>>> {
    let resp = analytics_service::monthly_sales().await?;
    Ok(Json(resp))
}
