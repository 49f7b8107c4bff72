//! Collapsible side navigation drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer's open flag belongs to the layout and arrives as a signal.
//! Expansion of nested items is local to this component and survives route
//! changes. Row layout (labels, tooltips, indentation) comes from
//! `state::navigation::row_presentation` so it stays testable without a DOM.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::icon::IconView;
use crate::config::APP_NAME;
use crate::config::navigation::{NAVIGATION_ITEMS, NavigationItem, SETTINGS_ITEM};
use crate::icons::Icon;
use crate::state::navigation::{NavigationState, active_item_ids, row_presentation, visible_rows};

#[component]
pub fn Navigation(#[prop(into)] open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let nav_state = RwSignal::new(NavigationState::new());
    let pathname = use_location().pathname;
    let active_ids = Memo::new(move |_| {
        pathname.with(|p| {
            let mut ids = active_item_ids(NAVIGATION_ITEMS, p);
            ids.extend(active_item_ids(std::slice::from_ref(&SETTINGS_ITEM), p));
            ids
        })
    });

    let rows = move || visible_rows(NAVIGATION_ITEMS, &nav_state.get(), open.get());

    view! {
        <nav class="side-nav" class:side-nav--collapsed=move || !open.get()>
            <div class="side-nav__toolbar">
                <Show when=move || open.get()>
                    <span class="side-nav__brand">{APP_NAME}</span>
                </Show>
                <button class="icon-button" on:click=move |_| on_toggle.run(())>
                    {move || {
                        let icon = if open.get() { Icon::ChevronLeft } else { Icon::ChevronRight };
                        view! { <IconView icon=icon/> }
                    }}
                </button>
            </div>
            <hr class="side-nav__divider"/>

            <ul class="side-nav__list">
                <For
                    each=rows
                    key=|(depth, item)| (*depth, item.id)
                    children=move |(depth, item)| {
                        view! { <NavRow item=item depth=depth open=open nav_state=nav_state active_ids=active_ids/> }
                    }
                />
            </ul>

            <hr class="side-nav__divider side-nav__divider--bottom"/>
            <ul class="side-nav__list">
                <NavRow item=&SETTINGS_ITEM depth=0 open=open nav_state=nav_state active_ids=active_ids/>
            </ul>
        </nav>
    }
}

#[component]
fn NavRow(
    item: &'static NavigationItem,
    depth: usize,
    open: Signal<bool>,
    nav_state: RwSignal<NavigationState>,
    active_ids: Memo<Vec<&'static str>>,
) -> impl IntoView {
    let navigate = use_navigate();
    let presentation = move || row_presentation(item, depth, open.get());
    let active = move || active_ids.with(|ids| ids.contains(&item.id));

    let on_click = move |_| {
        if item.has_children() {
            nav_state.update(|s| {
                s.toggle_expanded(item.id);
            });
        } else {
            navigate(item.path, NavigateOptions::default());
        }
    };

    view! {
        <li class="side-nav__row">
            <button
                class="side-nav__item"
                class:side-nav__item--active=active
                aria-current=move || active().then_some("page")
                title=move || presentation().tooltip
                style=move || format!("padding-left: {}px", presentation().indent_px)
                on:click=on_click
            >
                <IconView icon=item.icon class="side-nav__icon"/>
                <Show when=move || presentation().show_label>
                    <span class="side-nav__label">{item.label}</span>
                </Show>
                <Show when=move || presentation().show_expand_icon>
                    {move || {
                        let icon = if nav_state.get().is_expanded(item.id) { Icon::ExpandLess } else { Icon::ExpandMore };
                        view! { <IconView icon=icon/> }
                    }}
                </Show>
            </button>
        </li>
    }
}
