pub mod categories;
pub mod enums;
pub mod products;
pub mod sale_items;
pub mod sales;
pub mod settings;

pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use sale_items::Entity as SaleItems;
pub use sales::Entity as Sales;
pub use settings::Entity as Settings;
