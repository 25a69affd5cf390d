//! Product card for the result grid.

use dioxus::prelude::*;

use common::catalog::Product;
use common::pricing::{max_original_price_if_discounted, min_discounted_price};


#[component]
pub fn ProductCard(product: ReadSignal<Product>) -> Element {
    let price_txt = use_memo(move || {
        min_discounted_price(&product.read().item_variants)
            .map(|p| format!("${p:.2}"))
            .unwrap_or_else(|| "-".to_string())
    });
    // struck-through "was" price, only when a discount applies
    let was_price_txt = use_memo(move || {
        max_original_price_if_discounted(&product.read().item_variants)
            .map(|p| format!("${p:.2}"))
    });
    let image_src = use_memo(move || {
        product
            .read()
            .images
            .first()
            .map(|file| format!("/_product_image/{file}"))
    });

    rsx! {
        div {
            class: "x-product-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 10px;
                background: white;
                padding: 10px;
                box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.08);
            ",
            div {
                style: "
                    width: 100%;
                    height: 180px;
                    background-color: #F5F6F8;
                    border-radius: 8px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                ",
                if let Some(src) = image_src() {
                    img {
                        src: "{src}",
                        alt: "{product.read().name}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                } else {
                    span {
                        style: "color: rgba(28, 33, 45, 0.4); font-size: 14px;",
                        "No image"
                    }
                }
            }
            div {
                style: "
                    font-size: 15px;
                    font-weight: 500;
                    color: rgb(28, 33, 45);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{product.read().name}"
            }
            div {
                style: "font-size: 13px; color: rgba(28, 33, 45, 0.6); text-transform: capitalize;",
                "{product.read().colour}"
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: baseline;
                    gap: 8px;
                ",
                span {
                    style: "font-size: 16px; font-weight: 600; color: rgb(28, 33, 45);",
                    "{price_txt}"
                }
                if let Some(was) = was_price_txt() {
                    span {
                        style: "font-size: 13px; color: rgba(28, 33, 45, 0.5); text-decoration: line-through;",
                        "{was}"
                    }
                }
            }
        }
    }
}
