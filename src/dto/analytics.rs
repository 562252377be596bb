use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SalesByCategory {
    #[schema(value_type = Object)]
    pub shares: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MonthlySales {
    pub month: String,
    pub sales: u64,
    pub orders: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MonthlySalesList {
    #[schema(value_type = Vec<MonthlySales>)]
    pub items: Vec<MonthlySales>,
}
