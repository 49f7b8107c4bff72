//! Application chrome wrapping every routed page except onboarding.
//!
//! ARCHITECTURE
//! ============
//! Header + side navigation + scrollable content outlet. The layout owns the
//! drawer open flag (via the `LayoutState` context) and publishes the drawer
//! width as `--gm-drawer-width` so the content area offsets with it.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::header::Header;
use crate::components::navigation::Navigation;
use crate::state::layout::LayoutState;

#[component]
pub fn MainLayout() -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();

    let toggle_drawer = Callback::new(move |()| {
        layout.update(|l| {
            l.toggle_drawer();
        });
    });
    let drawer_open = Signal::derive(move || layout.get().drawer_open);

    let style = move || format!("--gm-drawer-width: {}px;", layout.get().drawer_width());

    view! {
        <div class="app-shell" style=style>
            <Header on_menu_click=toggle_drawer/>
            <Navigation open=drawer_open on_toggle=toggle_drawer/>
            <main class="app-shell__main">
                <div class="app-shell__content">
                    <Outlet/>
                </div>
            </main>
        </div>
    }
}
