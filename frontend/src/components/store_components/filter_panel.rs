//! Left panel listing the facets of the currently loaded page.

use dioxus::prelude::*;

use common::catalog::Variation;
use common::facet_catalog::sort_options_for_display;
use dioxus_free_icons::{Icon, icons::{md_navigation_icons::{MdArrowDropDown, MdArrowRight}, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::pages::products_page::ProductListState;


#[component]
pub fn FilterPanel() -> Element {
    let state = use_context::<ProductListState>();
    let catalog = state.facet_catalog;

    rsx! {
        div {
            id: "x-filter-panel-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 4px;
                padding: 14px;
                width: 100%;
            ",
            h2 {
                style: "font-size: 18px; font-weight: 500; color: rgb(28, 33, 45); margin: 0 0 8px 0;",
                "Filters"
            }
            if catalog.read().is_empty() {
                div {
                    style: "color: rgba(28, 33, 45, 0.6); font-size: 14px;",
                    "No filters for this page."
                }
            }
            for variation in catalog.read().iter().cloned() {
                FilterGroup {
                    key: "{variation.id}",
                    variation: variation.clone(),
                }
            }
        }
    }
}

/// One collapsible facet group. Open/closed is plain local UI state,
/// deliberately not part of the selection or the URL.
#[component]
fn FilterGroup(variation: ReadSignal<Variation>) -> Element {
    let mut is_open = use_signal(|| false);

    let sorted_options = use_memo(move || {
        let mut options = variation.read().options.clone();
        sort_options_for_display(&mut options);
        options
    });

    rsx! {
        div {
            class: "x-filter-group",
            style: "
                display: flex;
                flex-direction: column;
                border-bottom: 1px solid rgba(0,0,0,0.1);
                padding: 4px 0;
            ",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                    padding: 6px 2px;
                    font-size: 15px;
                    font-weight: 500;
                    color: rgb(28, 33, 45);
                    text-transform: capitalize;
                ",
                onclick: move |_| {
                    let open = *is_open.read();
                    is_open.set(!open);
                },
                if is_open() {
                    Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9); flex-shrink: 0;" }
                } else {
                    Icon { icon: MdArrowRight, style: "width: 20px; height: 20px; color: rgba(0,0,0,0.9); flex-shrink: 0;" }
                }
                "{variation.read().name}"
            }
            if is_open() {
                ul {
                    style: "list-style: none; margin: 0; padding: 0 0 6px 8px;",
                    for option in sorted_options.read().iter().cloned() {
                        li {
                            key: "{option.id}",
                            FilterOptionRow {
                                variation_id: variation.read().id,
                                option_id: option.id,
                                option_value: option.value.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOptionRow(variation_id: ReadSignal<u64>, option_id: ReadSignal<u64>, option_value: ReadSignal<String>) -> Element {
    let state = use_context::<ProductListState>();
    let is_checked = use_memo(move || {
        state.selection.read().contains(*variation_id.read(), *option_id.read())
    });

    rsx! {
        div {
            class: "x-filter-option-row",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 3px;
                align-items: center;
            ",
            onclick: move |_e| {
                state.toggle_option.call((
                    *variation_id.read(),
                    *option_id.read(),
                    option_value.read().clone(),
                ));
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 14px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{option_value}"
            }
        }
    }
}
