pub mod home_page;
pub mod products_page;
