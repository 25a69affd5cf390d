//! Top navigation bar layout component.

use dioxus::prelude::*;

use common::facet_selection::FacetSelection;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdHome, MdShoppingCart}};

use crate::routes::Route;


/// Shared navbar layout; pages render into the [`Outlet`] below it.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 20px;
                    height: 56px;
                    flex-shrink: 0;
                    background-color: #1C212D;
                    color: white;
                    padding: 0 20px;
                ",
                a {
                    href: Route::HomePage {}.to_string(),
                    style: "display: flex; align-items: center; gap: 8px; color: white; text-decoration: none; font-size: 18px; font-weight: 500;",
                    Icon { icon: MdShoppingCart, style: "width: 24px; height: 24px; color: white;" }
                    "Storefront"
                }
                div { style: "flex-grow: 1;" }
                a {
                    href: Route::HomePage {}.to_string(),
                    style: "display: flex; align-items: center; gap: 6px; color: white; text-decoration: none; font-size: 15px;",
                    Icon { icon: MdHome, style: "width: 20px; height: 20px; color: white;" }
                    "Home"
                }
                a {
                    href: Route::products_page(1, FacetSelection::new(), 0).to_string(),
                    style: "color: white; text-decoration: none; font-size: 15px;",
                    "Shop"
                }
            }

            div {
                id: "x-nav-page-content",
                style: "
                    flex-grow: 1;
                    width: 100%;
                    max-height: calc(100% - 56px);
                    overflow: hidden;
                ",
                Outlet::<Route> {}
            }
        }
    }
}
