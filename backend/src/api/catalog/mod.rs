//! Catalog service endpoints and shared wire types.

mod list_products;
pub use list_products::list_products;

mod category_filters;
pub use category_filters::category_filters;

mod get_category;
pub use get_category::get_category;

pub mod remote_types;
