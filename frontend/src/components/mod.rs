pub mod error_boundary;
pub mod navbar;
pub mod store_components;
pub mod suspend_boundary;
