use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, ProductType};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub product_type: ProductType,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
