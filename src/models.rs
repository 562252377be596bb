use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::entity::enums::{PaymentMethod, ProductType};
use crate::entity::{categories, products, sale_items, sales, settings};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub product_type: ProductType,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Sale {
    pub id: i32,
    pub total_amount: f64,
    pub discount_amount: f64,
    pub vat_amount: f64,
    pub payment_method: PaymentMethod,
    pub sale_date: DateTime<Utc>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleItem {
    pub id: i32,
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            category_id: model.category_id,
            product_type: model.product_type,
        }
    }
}

impl From<sales::Model> for Sale {
    fn from(model: sales::Model) -> Self {
        Self {
            id: model.id,
            total_amount: model.total_amount,
            discount_amount: model.discount_amount,
            vat_amount: model.vat_amount,
            payment_method: model.payment_method,
            sale_date: model.sale_date,
            customer_name: model.customer_name,
        }
    }
}

impl From<sale_items::Model> for SaleItem {
    fn from(model: sale_items::Model) -> Self {
        Self {
            id: model.id,
            sale_id: model.sale_id,
            product_id: model.product_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
            total_price: model.total_price,
        }
    }
}

impl From<settings::Model> for Setting {
    fn from(model: settings::Model) -> Self {
        Self {
            key: model.key,
            value: model.value,
        }
    }
}
