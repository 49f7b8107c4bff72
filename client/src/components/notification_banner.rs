//! Transient banner for the most recent notification.
//!
//! DESIGN
//! ======
//! Each `show` bumps the state's banner seq; this component starts one
//! auto-hide timer per seq. Timers share a token cancelled on unmount, and
//! `expire_banner` ignores stale seqs, so neither a disposed banner nor a
//! replaced one can be touched by a late timer.

use leptos::prelude::*;

use crate::components::icon::IconView;
use crate::icons::Icon;
use crate::state::notifications::{BANNER_AUTO_HIDE, NotificationState};
use crate::util::task::{CancelToken, spawn_delayed};

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let alive = CancelToken::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });

    let banner_seq = Memo::new(move |_| notifications.with(NotificationState::banner_seq));
    Effect::new(move |_| {
        let seq = banner_seq.get();
        if seq == 0 {
            return;
        }
        spawn_delayed(BANNER_AUTO_HIDE, alive.clone(), move || {
            notifications.update(|n| {
                if n.expire_banner(seq) {
                    log::debug!("banner {seq} auto-hidden");
                }
            });
        });
    });

    let on_close = move |_| notifications.update(NotificationState::dismiss_banner);

    view! {
        <Show when=move || notifications.with(NotificationState::is_banner_visible)>
            {move || {
                notifications
                    .with(|n| n.banner().cloned())
                    .map(|banner| {
                        view! {
                            <div
                                class=format!("notification-banner notification-banner--{}", banner.kind.as_str())
                                role="status"
                            >
                                <IconView icon=banner.kind.icon() class="notification-banner__icon"/>
                                <div class="notification-banner__body">
                                    <strong>{banner.title}</strong>
                                    <br/>
                                    {banner.message}
                                </div>
                                <button class="icon-button notification-banner__close" title="Close" on:click=on_close>
                                    <IconView icon=Icon::Close/>
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
