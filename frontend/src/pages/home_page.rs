use dioxus::prelude::*;

use common::facet_selection::FacetSelection;
use crate::routes::Route;


/// Landing page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Storefront - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            h1 {
                style: "font-size: 32px; font-weight: 300; color: rgb(28, 33, 45); margin: 0;",
                "Welcome to the storefront"
            }
            p {
                style: "font-size: 17px; color: rgba(28, 33, 45, 0.7); margin: 0;",
                "Browse a category and narrow it down with the filters on the left. The URL always reflects your filters, so any view can be shared or bookmarked."
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    margin-top: 10px;
                ",
                CategoryCard { category_id: 1, label: "Men" }
                CategoryCard { category_id: 2, label: "Women" }
                CategoryCard { category_id: 3, label: "Kids" }
            }
        }
    }
}

#[component]
fn CategoryCard(category_id: u64, label: String) -> Element {
    rsx! {
        a {
            href: Route::products_page(category_id, FacetSelection::new(), 0).to_string(),
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 220px;
                height: 120px;
                background: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 12px;
                box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.08);
                color: rgb(28, 33, 45);
                font-size: 20px;
                text-decoration: none;
            ",
            "{label}"
        }
    }
}
