//! Shared body for pages whose feature UI has not been built yet.

use leptos::prelude::*;

#[component]
pub fn PlaceholderPage(title: &'static str, description: &'static str, pending: &'static str) -> impl IntoView {
    view! {
        <section class="page page--placeholder">
            <div class="paper">
                <h1 class="page__title">{title}</h1>
                <p class="page__description">{description}</p>
                <p class="page__pending">{pending}</p>
            </div>
        </section>
    }
}
