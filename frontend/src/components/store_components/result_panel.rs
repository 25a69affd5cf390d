//! Right panel: active-filter chips, sort and page-size controls, the
//! product grid and pagination.

use dioxus::prelude::*;

use common::list_const::{MAX_PAGE_BUTTONS, PAGE_SIZES};
use common::list_query::{SortBy, SortOrder};
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertLink, md_navigation_icons::{MdArrowBack, MdArrowDropDown, MdArrowForward, MdClose}}};

use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::store_components::product_card::ProductCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::pages::products_page::ProductListState;


#[component]
pub fn ResultPanel() -> Element {
    rsx! {
        div {
            id: "x-result-panel-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                padding: 14px;
                width: 100%;
            ",
            ResultHeaderRow {}
            ActiveFilterChips {}
            ProductGridView {}
            PaginationControls {}
        }
    }
}

#[component]
fn ResultHeaderRow() -> Element {
    let state = use_context::<ProductListState>();
    let category = state.category;
    let category_name = use_memo(move || match category.read().as_ref() {
        Some(Ok(c)) => c.name.clone(),
        _ => "...".to_string(),
    });
    let result_count_txt = use_memo(move || match state.product_page.read().as_ref() {
        Some(Ok(page)) => format!("{} products", page.total_elements),
        Some(Err(_)) => "".to_string(),
        None => "...".to_string(),
    });

    rsx! {
        div {
            id: "x-result-header-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 22px; font-weight: 300; color: rgb(75, 87, 112); margin: 0; text-transform: capitalize;",
                "{category_name}"
            }
            span {
                style: "font-size: 15px; color: rgba(28, 33, 45, 0.7);",
                "{result_count_txt}"
            }
            div { style: "flex-grow: 1;" }
            ShareViewButton {}
            SortByControl {}
            PageSizeControl {}
        }
    }
}

#[component]
fn ActiveFilterChips() -> Element {
    let state = use_context::<ProductListState>();
    let resolved = state.resolved_selection;
    if resolved.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
            ",
            for (variation_id, selected) in resolved.read().0.iter() {
                for (idx, option_id) in selected.option_ids.iter().copied().enumerate() {
                    FilterChip {
                        key: "{variation_id}-{option_id}",
                        variation_id: *variation_id,
                        option_id,
                        // empty until the category filters have loaded
                        label: selected.display_names.get(idx).cloned().unwrap_or_default(),
                    }
                }
            }
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 14px;
                    color: rgb(75, 87, 112);
                    text-decoration: underline;
                ",
                onclick: move |_| {
                    state.clear_filters.call(());
                },
                "Clear all"
            }
        }
    }
}

#[component]
fn FilterChip(variation_id: ReadSignal<u64>, option_id: ReadSignal<u64>, label: ReadSignal<String>) -> Element {
    let state = use_context::<ProductListState>();
    rsx! {
        div {
            class: "x-filter-chip",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                border: 1px solid rgba(0,0,0,0.4);
                border-radius: 1000px;
                background-color: white;
                padding: 4px 10px;
                font-size: 14px;
            ",
            "{label}"
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    padding: 0;
                ",
                onclick: move |_| {
                    state.remove_option.call((*variation_id.read(), *option_id.read()));
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px; color: rgba(0,0,0,0.7);" }
            }
        }
    }
}

/// Copies the current filtered view's URL, which carries the whole
/// filter/page state and can be shared or bookmarked.
#[component]
fn ShareViewButton() -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let url = web_sys::window().unwrap().location().href().unwrap();
        let _r = web_sys::window().unwrap().navigator().clipboard().write_text(&url);
        dioxus::logger::tracing::info!("Link copied to clipboard: {:#?}", url);

        let toast_api = dioxus_primitives::toast::consume_toast();
        toast_api.info(
            "Link copied to clipboard.".to_string(),
            dioxus_primitives::toast::ToastOptions::new()
                .description("Anyone opening the link sees this filtered view.")
                .duration(std::time::Duration::from_secs(10))
                .permanent(false),
        );
    });
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid rgba(0,0,0,0.4);
                border-radius: 8px;
                background: white;
                cursor: pointer;
                padding: 6px 10px;
                font-size: 14px;
            ",
            onclick: move |_| do_copy_link(()),
            Icon { icon: MdInsertLink, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.8);" }
            "Share"
        }
    }
}

/// Closed custom dropdown, not a native select; open state is local.
#[component]
fn SortByControl() -> Element {
    let state = use_context::<ProductListState>();
    let mut is_open = use_signal(|| false);

    let current_label = use_memo(move || {
        match (*state.sort_by.read(), *state.sort_order.read()) {
            (SortBy::Id, _) => "Newest",
            (SortBy::Price, SortOrder::Asc) => "Price: Low to High",
            (SortBy::Price, SortOrder::Desc) => "Price: High to Low",
        }
    });
    let choices: [(&str, SortBy, SortOrder); 3] = [
        ("Newest", SortBy::Id, SortOrder::Asc),
        ("Price: Low to High", SortBy::Price, SortOrder::Asc),
        ("Price: High to Low", SortBy::Price, SortOrder::Desc),
    ];

    rsx! {
        DropdownShell {
            label: "Sort: {current_label}",
            is_open,
            for (label, by, order) in choices {
                DropdownRow {
                    label: label.to_string(),
                    onselect: move |_| {
                        state.set_sort.call((by, order));
                        is_open.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn PageSizeControl() -> Element {
    let state = use_context::<ProductListState>();
    let mut is_open = use_signal(|| false);
    let current = use_memo(move || *state.page_size.read());

    rsx! {
        DropdownShell {
            label: "Show {current}",
            is_open,
            for size in PAGE_SIZES {
                DropdownRow {
                    label: size.to_string(),
                    onselect: move |_| {
                        state.set_page_size.call(size);
                        is_open.set(false);
                    },
                }
            }
        }
    }
}

#[component]
fn DropdownShell(label: String, mut is_open: Signal<bool>, children: Element) -> Element {
    rsx! {
        div {
            style: "position: relative;",
            button {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    border: 1px solid rgba(0,0,0,0.4);
                    border-radius: 8px;
                    background: white;
                    cursor: pointer;
                    padding: 6px 10px;
                    font-size: 14px;
                ",
                onclick: move |_| {
                    let open = *is_open.read();
                    is_open.set(!open);
                },
                "{label}"
                Icon { icon: MdArrowDropDown, style: "width: 18px; height: 18px; color: rgba(0,0,0,0.8);" }
            }
            if is_open() {
                div {
                    style: "
                        position: absolute;
                        top: 34px;
                        right: 0;
                        min-width: 160px;
                        background: white;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 8px;
                        box-shadow: 0 2px 8px 0 rgba(0, 0, 0, 0.15);
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                    ",
                    {children}
                }
            }
        }
    }
}

#[component]
fn DropdownRow(label: String, onselect: Callback<()>) -> Element {
    rsx! {
        button {
            style: "
                border: none;
                background: none;
                cursor: pointer;
                text-align: left;
                padding: 8px 12px;
                font-size: 14px;
            ",
            class: "x-dropdown-row",
            onclick: move |_| onselect(()),
            "{label}"
        }
    }
}

#[component]
fn ProductGridView() -> Element {
    let state = use_context::<ProductListState>();
    let product_page = state.product_page;
    let product_page = product_page.read();
    let page = match product_page.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(page)) => page,
        None => return rsx! { LoadingIndicator {} },
    };

    if page.content.is_empty() {
        return rsx! {
            div {
                style: "
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 60px;
                    color: rgba(28, 33, 45, 0.6);
                    font-size: 18px;
                ",
                "No products found."
            }
        };
    }

    rsx! {
        ul {
            id: "x-product-grid",
            style: "
                list-style: none;
                margin: 0;
                padding: 0;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                gap: 14px;
            ",
            for product in page.content.iter().cloned() {
                li {
                    key: "{product.id}",
                    ProductCard { product: product.clone() }
                }
            }
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let state = use_context::<ProductListState>();
    let page_number = state.page_number;
    let set_page_number = state.set_page_number;

    let total_pages = use_memo(move || match state.product_page.read().as_ref() {
        Some(Ok(page)) => page.total_pages,
        _ => 0,
    });
    // one-based for display, zero-based in state
    let selected_page = use_memo(move || *page_number.read() + 1);
    let can_go_to_previous_page = use_memo(move || selected_page() > 1);
    let can_go_to_next_page = use_memo(move || selected_page() < *total_pages.read());

    if *total_pages.read() <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-pagination-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
                padding: 14px 0;
            ",
            PageNavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| { set_page_number(*page_number.read() - 1); },
            }
            for display_page in 1..=(*total_pages.read()).min(MAX_PAGE_BUTTONS) {
                PageNumberButton {
                    key: "{display_page}",
                    display_page,
                    selected: display_page == selected_page(),
                    onclick: move |_| { set_page_number(display_page - 1); },
                }
            }
            PageNavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| { set_page_number(*page_number.read() + 1); },
            }
        }
    }
}

#[component]
fn PageNumberButton(display_page: u64, selected: bool, onclick: Callback<()>) -> Element {
    let background = if selected { "rgb(28, 33, 45)" } else { "white" };
    let color = if selected { "white" } else { "black" };
    rsx! {
        button {
            style: "
                width: 32px;
                height: 32px;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 8px;
                cursor: pointer;
                background: {background};
                color: {color};
                font-size: 14px;
            ",
            onclick: move |_| onclick(()),
            "{display_page}"
        }
    }
}

#[component]
fn PageNavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 8px;
                padding: 4px;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
