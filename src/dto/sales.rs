use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{PaymentMethod, Sale, SaleItem};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaleItemRequest {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSaleRequest {
    pub items: Vec<SaleItemRequest>,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaleWithItems {
    #[serde(flatten)]
    pub sale: Sale,
    pub subtotal: f64,
    pub items: Vec<SaleItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SaleList {
    #[schema(value_type = Vec<Sale>)]
    pub items: Vec<Sale>,
}
