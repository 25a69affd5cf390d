use dioxus::prelude::*;

use common::facet_selection::FacetSelection;

use crate::components::navbar::Navbar;
use crate::data_definitions::products_query::ProductsQuery;
use crate::pages::home_page::HomePage;
use crate::pages::products_page::ProductsPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/products?:..query")]
    ProductsPage {
        query: ProductsQuery,
    },

}

impl Route {
    /// Every filter/page change funnels through here so the URL always
    /// carries a consistent tuple of category, filters and page.
    pub fn products_page(category: u64, selection: FacetSelection, page_number: u64) -> Self {
        Self::ProductsPage {
            query: ProductsQuery {
                category,
                selection,
                page_number,
            },
        }
    }
}
