//! Loading placeholder card shown while dashboard analytics load.

use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="card card--skeleton" aria-busy="true">
            <div class="skeleton__head">
                <span class="skeleton skeleton--avatar"></span>
                <div class="skeleton__lines">
                    <span class="skeleton skeleton--line"></span>
                    <span class="skeleton skeleton--line skeleton--short"></span>
                </div>
            </div>
            <span class="skeleton skeleton--bar"></span>
            <span class="skeleton skeleton--bar skeleton--wide"></span>
        </div>
    }
}
