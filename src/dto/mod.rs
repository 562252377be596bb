pub mod analytics;
pub mod categories;
pub mod products;
pub mod sales;
pub mod settings;
