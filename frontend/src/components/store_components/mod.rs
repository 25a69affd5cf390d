pub mod filter_panel;
pub mod product_card;
pub mod result_panel;
