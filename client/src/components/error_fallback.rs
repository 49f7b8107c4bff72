//! Fallback view for the top-level error boundary.

use leptos::prelude::*;

/// Lists every error captured by the boundary.
#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || errors.get().into_iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>();

    view! {
        <section class="page page--error" role="alert">
            <div class="paper">
                <h1 class="page__title">"Something went wrong"</h1>
                <ul class="error-list">
                    {move || {
                        messages()
                            .into_iter()
                            .map(|message| view! { <li class="error-list__item">{message}</li> })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}
