use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        analytics::{MonthlySales, MonthlySalesList, SalesByCategory},
        categories::{CategoryList, CreateCategoryRequest},
        products::{CreateProductRequest, ProductList},
        sales::{CreateSaleRequest, SaleItemRequest, SaleList, SaleWithItems},
        settings::UpdateSettingQuery,
    },
    models::{Category, PaymentMethod, Product, ProductType, Sale, SaleItem, Setting},
    response::{ApiResponse, Meta},
    routes::{analytics, categories, health, products, sales, settings},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "POS System API", version = "1.0.0"),
    paths(
        health::root,
        health::health_check,
        categories::list_categories,
        categories::create_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::delete_product,
        sales::create_sale,
        sales::list_sales,
        sales::get_sale,
        settings::get_setting,
        settings::update_setting,
        analytics::sales_by_category,
        analytics::monthly_sales
    ),
    components(
        schemas(
            Category,
            Product,
            ProductType,
            Sale,
            SaleItem,
            PaymentMethod,
            Setting,
            CreateCategoryRequest,
            CategoryList,
            CreateProductRequest,
            ProductList,
            SaleItemRequest,
            CreateSaleRequest,
            SaleWithItems,
            SaleList,
            UpdateSettingQuery,
            SalesByCategory,
            MonthlySales,
            MonthlySalesList,
            Meta,
            ApiResponse<Category>,
            ApiResponse<CategoryList>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<SaleWithItems>,
            ApiResponse<SaleList>,
            ApiResponse<Setting>
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Categories", description = "Category catalog"),
        (name = "Products", description = "Product catalog"),
        (name = "Sales", description = "Checkout and sale history"),
        (name = "Settings", description = "Key-value settings with defaults"),
        (name = "Analytics", description = "Placeholder analytics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
