//! Placeholder analytics. The payloads are fixed and do not read the store.

use crate::{
    dto::analytics::{MonthlySales, MonthlySalesList, SalesByCategory},
    error::AppResult,
    response::{ApiResponse, Meta},
};

const SALES_BY_CATEGORY: [(&str, u32); 4] = [
    ("Electronics", 35),
    ("Clothing", 25),
    ("Food & Beverage", 20),
    ("Services", 20),
];

const MONTHLY_SALES: [(&str, u64, u32); 6] = [
    ("Jan", 45_000, 120),
    ("Feb", 52_000, 140),
    ("Mar", 48_000, 130),
    ("Apr", 61_000, 165),
    ("May", 55_000, 150),
    ("Jun", 67_000, 180),
];

pub async fn sales_by_category() -> AppResult<ApiResponse<SalesByCategory>> {
    let shares = SALES_BY_CATEGORY
        .iter()
        .map(|(category, share)| (category.to_string(), *share))
        .collect();
    Ok(ApiResponse::success(
        "Sales by category",
        SalesByCategory { shares },
        Some(Meta::empty()),
    ))
}

pub async fn monthly_sales() -> AppResult<ApiResponse<MonthlySalesList>> {
    let items: Vec<MonthlySales> = MONTHLY_SALES
        .iter()
        .map(|(month, sales, orders)| MonthlySales {
            month: month.to_string(),
            sales: *sales,
            orders: *orders,
        })
        .collect();
    let meta = Meta::total(items.len() as u64);
    Ok(ApiResponse::success(
        "Monthly sales",
        MonthlySalesList { items },
        Some(meta),
    ))
}
