//! The product browsing page: canonical owner of filter, sort and
//! pagination state.

use dioxus::prelude::*;

use common::catalog::{Category, ProductPage as ProductPageModel, Variation};
use common::facet_catalog::aggregate_facets;
use common::facet_selection::FacetSelection;
use common::filter_codec;
use common::list_query::{ProductListQuery, SortBy, SortOrder};

use crate::api::catalog_api::{category_filters, get_category, list_products};
use crate::components::store_components::filter_panel::FilterPanel;
use crate::components::store_components::result_panel::ResultPanel;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::products_query::ProductsQuery;
use crate::data_definitions::stored_prefs::{ListPrefs, load_list_prefs, save_list_prefs};
use crate::routes::Route;


#[component]
pub fn ProductsPage(query: ProductsQuery) -> Element {
    rsx! {
        Title { "Shop products" }
        ProductsPageRootComponent { query: query.clone() }
    }
}

/// Everything the filter and result panels need, published once per
/// page as context (new immutable snapshots flow through the signals on
/// every mutation).
#[derive(Clone, Copy)]
pub struct ProductListState {
    pub category_id: ReadSignal<u64>,
    /// Active filters as hydrated from the URL.
    pub selection: ReadSignal<FacetSelection>,
    /// Active filters with display names re-resolved against the
    /// category's available filters, for chip rendering.
    pub resolved_selection: ReadSignal<FacetSelection>,
    pub page_number: ReadSignal<u64>,
    pub page_size: ReadSignal<u64>,
    pub sort_by: ReadSignal<SortBy>,
    pub sort_order: ReadSignal<SortOrder>,
    pub category: ReadSignal<Option<Result<Category, ServerFnError>>>,
    pub product_page: ReadSignal<Option<Result<ProductPageModel, ServerFnError>>>,
    /// Facets derivable from the currently loaded page only.
    pub facet_catalog: ReadSignal<Vec<Variation>>,
    pub toggle_option: Callback<(u64, u64, String)>,
    pub remove_option: Callback<(u64, u64)>,
    pub clear_filters: Callback<()>,
    pub set_page_number: Callback<u64>,
    pub set_page_size: Callback<u64>,
    pub set_sort: Callback<(SortBy, SortOrder)>,
}

#[component]
fn ProductsPageRootComponent(query: ReadSignal<ProductsQuery>) -> Element {
    // URL-owned state, re-derived on every navigation (incl. back/forward)
    let category_id = use_memo(move || query.read().category);
    let selection = use_memo(move || query.read().selection.clone());
    let page_number = use_memo(move || query.read().page_number);

    // durable view preferences
    let initial_prefs = use_hook(load_list_prefs);
    let mut page_size = use_signal(move || initial_prefs.page_size);
    let mut sort_by = use_signal(move || initial_prefs.sort_by);
    let mut sort_order = use_signal(move || initial_prefs.sort_order);

    let category = use_resource(move || get_category(category_id()));

    let mut product_page = use_resource(move || {
        // one consistent tuple per fetch: the page number travels with
        // the filter set it belongs to
        let q = ProductListQuery {
            category_id: category_id(),
            selection: selection(),
            page_number: page_number(),
            page_size: page_size(),
            sort_by: sort_by(),
            sort_order: sort_order(),
        };
        list_products(q)
    });
    // when any fetch parameter changes, we need to restart the product page
    // resource; restarting drops the in-flight request, so a stale response
    // can never overwrite a fresher one
    use_effect(move || {
        let _ = query.read();
        let _ = page_size.read();
        let _ = sort_by.read();
        let _ = sort_order.read();
        product_page.clear();
        product_page.restart();
    });

    let mut available_filters = use_resource(move || {
        category_filters(category_id(), selection())
    });
    use_effect(move || {
        let _ = query.read();
        available_filters.clear();
        available_filters.restart();
    });

    // rebuilt in full from the loaded page, never merged across pages
    let facet_catalog = use_memo(move || {
        let page = product_page.read();
        match page.as_ref() {
            Some(Ok(page)) => aggregate_facets(&page.content),
            _ => Vec::new(),
        }
    });

    // chip labels come from the fetched filter set, not from whatever
    // names the URL hydration produced; unknown ids keep an empty label
    // until the filters load
    let resolved_selection = use_memo(move || {
        let mut resolved = selection();
        if let Some(Ok(filters)) = available_filters.read().as_ref() {
            filter_codec::resolve_display_names(&mut resolved, filters);
        }
        resolved
    });

    let set_selection = Callback::new(move |new_selection: FacetSelection| {
        // any filter change invalidates the current page index
        navigator().push(Route::products_page(category_id(), new_selection, 0));
    });
    let toggle_option = Callback::new(move |(variation_id, option_id, display_name): (u64, u64, String)| {
        let mut new_selection = selection();
        new_selection.toggle(variation_id, option_id, &display_name);
        set_selection(new_selection);
    });
    let remove_option = Callback::new(move |(variation_id, option_id): (u64, u64)| {
        let mut new_selection = selection();
        new_selection.remove(variation_id, option_id);
        set_selection(new_selection);
    });
    let clear_filters = Callback::new(move |_: ()| {
        set_selection(FacetSelection::new());
    });
    let set_page_number = Callback::new(move |page: u64| {
        navigator().push(Route::products_page(category_id(), selection(), page));
    });
    let save_prefs = move || {
        save_list_prefs(ListPrefs {
            page_size: *page_size.peek(),
            sort_by: *sort_by.peek(),
            sort_order: *sort_order.peek(),
        });
    };
    let set_page_size = Callback::new(move |size: u64| {
        page_size.set(size);
        save_prefs();
    });
    let set_sort = Callback::new(move |(by, order): (SortBy, SortOrder)| {
        sort_by.set(by);
        sort_order.set(order);
        save_prefs();
    });

    use_context_provider(move || ProductListState {
        category_id: category_id.into(),
        selection: selection.into(),
        resolved_selection: resolved_selection.into(),
        page_number: page_number.into(),
        page_size: page_size.into(),
        sort_by: sort_by.into(),
        sort_order: sort_order.into(),
        category: category.into(),
        product_page: product_page.into(),
        facet_catalog: facet_catalog.into(),
        toggle_option,
        remove_option,
        clear_filters,
        set_page_number,
        set_page_size,
        set_sort,
    });

    rsx! {
        div {
            id: "x-products-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: row;
            "#,
            div {
                id: "x-products-left-panel",
                style: "
                    height: 100%;
                    background-color: #F5F6F8;
                    border-right: 1px solid rgb(164, 164, 164);
                    flex-shrink: 0;
                    width: 280px;
                    overflow-y: auto;
                ",
                SuspendWrapper { FilterPanel {} }
            }
            div {
                id: "x-products-right-panel",
                style: "
                    height: 100%;
                    flex-grow: 1;
                    min-width: 400px;
                    overflow-y: auto;
                ",
                SuspendWrapper { ResultPanel {} }
            }
        }
    }
}
