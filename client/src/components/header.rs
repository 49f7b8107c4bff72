//! Top application bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the drawer toggle, brand, active-goal chip, chatbot shortcut, theme
//! toggle, notification bell, and profile avatar. The notification and
//! profile dropdowns are tracked independently in [`HeaderMenus`]; picking
//! any entry, or clicking the backdrop, closes both.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::icon::IconView;
use crate::config::routes::AppRoute;
use crate::config::{ACTIVE_GOAL_LABEL, APP_CONFIG, APP_NAME};
use crate::icons::Icon;
use crate::state::layout::HeaderMenus;
use crate::state::notifications::NotificationState;
use crate::state::theme::ThemeState;
use crate::util::clock;

#[component]
pub fn Header(on_menu_click: Callback<()>) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let menus = RwSignal::new(HeaderMenus::default());
    let navigate = use_navigate();

    let features = APP_CONFIG.features;
    let unread = move || notifications.with(NotificationState::unread_count);

    let on_toggle_theme = move |_| {
        theme.update(|t| {
            let mode = t.toggle();
            log::debug!("theme switched to {}", mode.as_str());
        });
    };

    let navigate_chat = navigate.clone();
    let on_chatbot = move |_| navigate_chat(AppRoute::Chatbot.path(), NavigateOptions::default());

    let go_to = move |route: AppRoute| {
        menus.update(HeaderMenus::close_all);
        navigate(route.path(), NavigateOptions::default());
    };
    let go_profile = go_to.clone();
    let go_settings = go_to;

    let on_logout = move |_| {
        log::info!("logout requested");
        menus.update(HeaderMenus::close_all);
    };

    let on_clear_all = move |_| {
        notifications.update(NotificationState::clear_all);
        menus.update(HeaderMenus::close_all);
    };

    view! {
        <header class="app-header">
            <button
                class="icon-button app-header__menu"
                aria-label="open drawer"
                on:click=move |_| on_menu_click.run(())
            >
                <IconView icon=Icon::Menu/>
            </button>
            <span class="app-header__brand">{APP_NAME}</span>

            <div class="app-header__actions">
                <span class="chip chip--primary app-header__goal">{format!("Active Goal: {ACTIVE_GOAL_LABEL}")}</span>

                <Show when=move || features.chatbot>
                    <button class="icon-button icon-button--filled" title="AI Chatbot Tutor" on:click=on_chatbot.clone()>
                        <IconView icon=Icon::Chat/>
                    </button>
                </Show>

                <Show when=move || features.dark_mode>
                    <button
                        class="icon-button"
                        title=move || theme.get().mode().toggle_tooltip()
                        on:click=on_toggle_theme
                    >
                        {move || view! { <IconView icon=theme.get().mode().toggle_icon()/> }}
                    </button>
                </Show>

                <Show when=move || features.notifications>
                    <button
                        class="icon-button app-header__bell"
                        title="Notifications"
                        on:click=move |_| menus.update(HeaderMenus::open_notifications)
                    >
                        <IconView icon=Icon::Notifications/>
                        <Show when=move || { unread() > 0 }>
                            <span class="badge">{unread}</span>
                        </Show>
                    </button>
                </Show>

                <button
                    class="avatar-button"
                    title="Account settings"
                    on:click=move |_| menus.update(HeaderMenus::open_profile)
                >
                    <span class="avatar">
                        <IconView icon=Icon::Person/>
                    </span>
                </button>
            </div>

            <Show when=move || menus.get().any_open()>
                <div class="menu-backdrop" on:click=move |_| menus.update(HeaderMenus::close_all)></div>
            </Show>

            <Show when=move || menus.get().profile_open>
                <div class="menu menu--profile" role="menu">
                    <button class="menu__item" role="menuitem" on:click={
                        let go = go_profile.clone();
                        move |_| go(AppRoute::LearnerProfile)
                    }>
                        <IconView icon=Icon::Person/>
                        "My Profile"
                    </button>
                    <button class="menu__item" role="menuitem" on:click={
                        let go = go_settings.clone();
                        move |_| go(AppRoute::Settings)
                    }>
                        <IconView icon=Icon::Settings/>
                        "Settings"
                    </button>
                    <hr class="menu__divider"/>
                    <button class="menu__item" role="menuitem" on:click=on_logout>
                        <IconView icon=Icon::Logout/>
                        "Logout"
                    </button>
                </div>
            </Show>

            <Show when=move || menus.get().notifications_open>
                <div class="menu menu--notifications" role="menu">
                    <div class="menu__header">
                        <h2>"Notifications"</h2>
                    </div>
                    <NotificationMenuItems menus=menus/>
                    <div class="menu__footer">
                        <button class="text-button" on:click=on_clear_all>
                            "Clear all"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// History entries, newest first, with relative timestamps.
#[component]
fn NotificationMenuItems(menus: RwSignal<HeaderMenus>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    move || {
        let now = clock::now();
        let history = notifications.with(|n| n.history().to_vec());
        if history.is_empty() {
            return view! { <p class="menu__empty">"No notifications"</p> }.into_any();
        }
        history
            .into_iter()
            .map(|entry| {
                let id = entry.id.clone();
                let class = if entry.read { "menu__item menu__item--read" } else { "menu__item menu__item--unread" };
                let on_select = move |_| {
                    notifications.update(|n| n.mark_as_read(&id));
                    menus.update(HeaderMenus::close_all);
                };
                view! {
                    <button class=class role="menuitem" on:click=on_select>
                        <IconView icon=entry.kind.icon()/>
                        <span class="menu__text">
                            <span class="menu__title">{entry.title}</span>
                            <span class="menu__caption">{clock::relative_label(entry.timestamp, now)}</span>
                        </span>
                    </button>
                }
            })
            .collect_view()
            .into_any()
    }
}
