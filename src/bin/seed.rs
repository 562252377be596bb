use pos_backend::{
    config::AppConfig,
    db::{DbPool, create_pool, orm_from_pool, run_migrations},
    dto::sales::{CreateSaleRequest, SaleItemRequest},
    models::PaymentMethod,
    services::sale_service,
    state::AppState,
};

const CATEGORIES: [(&str, &str); 4] = [
    ("Electronics", "Electronic devices and accessories"),
    ("Clothing", "Apparel and fashion items"),
    ("Food & Beverage", "Food and drink items"),
    ("Professional", "Professional services"),
];

// (name, price, category, product_type)
const PRODUCTS: [(&str, f64, &str, &str); 6] = [
    ("Laptop Pro", 15000.00, "Electronics", "product"),
    ("Designer T-Shirt", 250.00, "Clothing", "product"),
    ("Premium Coffee", 45.00, "Food & Beverage", "product"),
    ("Consultation", 500.00, "Professional", "service"),
    ("Laptop + Setup", 16000.00, "Electronics", "combo"),
    ("Wireless Headphones", 2000.00, "Electronics", "product"),
];

const SETTINGS: [(&str, &str); 3] = [
    ("vat_rate", "15"),
    ("currency", "ZAR"),
    ("company_name", "POS System"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    let state = AppState::new(orm_from_pool(pool.clone()));
    // Ensure migrations are applied.
    run_migrations(&state.orm).await?;

    seed_categories(&pool).await?;
    seed_products(&pool).await?;
    seed_settings(&pool).await?;
    seed_sales(&pool, &state).await?;

    println!("Seed completed.");
    Ok(())
}

async fn seed_categories(pool: &DbPool) -> anyhow::Result<()> {
    for (name, description) in CATEGORIES {
        sqlx::query(
            r#"
            INSERT INTO categories (name, description)
            VALUES (?1, ?2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    }

    println!("Seeded categories");
    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    for (name, price, category, product_type) in PRODUCTS {
        sqlx::query(
            r#"
            INSERT INTO products (name, price, category_id, product_type)
            SELECT ?1, ?2, c.id, ?3 FROM categories c
            WHERE c.name = ?4
              AND NOT EXISTS (SELECT 1 FROM products p WHERE p.name = ?1)
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(product_type)
        .bind(category)
        .execute(pool)
        .await?;
    }

    println!("Seeded products");
    Ok(())
}

async fn seed_settings(pool: &DbPool) -> anyhow::Result<()> {
    for (key, value) in SETTINGS {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT (key) DO NOTHING")
            .bind(key)
            .bind(value)
            .execute(pool)
            .await?;
    }

    println!("Seeded settings");
    Ok(())
}

/// Sample sales go through the sale service so totals use the same arithmetic as the API.
async fn seed_sales(pool: &DbPool, state: &AppState) -> anyhow::Result<()> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sales")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        println!("Sales already present, skipping sample sales");
        return Ok(());
    }

    let samples = [
        (
            "John Doe",
            PaymentMethod::Cash,
            vec![("Laptop Pro", 1), ("Premium Coffee", 2)],
            0.0,
        ),
        (
            "Jane Smith",
            PaymentMethod::Card,
            vec![("Designer T-Shirt", 2), ("Consultation", 1)],
            50.0,
        ),
    ];

    for (customer, payment_method, lines, discount_amount) in samples {
        let mut items = Vec::with_capacity(lines.len());
        for (product, quantity) in lines {
            let (product_id, unit_price): (i32, f64) =
                sqlx::query_as("SELECT id, price FROM products WHERE name = ?1")
                    .bind(product)
                    .fetch_one(pool)
                    .await?;
            items.push(SaleItemRequest {
                product_id,
                quantity,
                unit_price,
            });
        }

        let resp = sale_service::create_sale(
            state,
            CreateSaleRequest {
                items,
                discount_amount,
                customer_name: Some(customer.to_string()),
                payment_method: Some(payment_method),
            },
        )
        .await?;

        if let Some(sale) = resp.data {
            println!(
                "Seeded sale {} for {customer}: total {:.2}",
                sale.sale.id, sale.sale.total_amount
            );
        }
    }

    Ok(())
}
