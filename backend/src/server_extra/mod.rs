pub mod product_image;
