//! First-run welcome screen. Rendered outside the main layout, so it has no
//! header or drawer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::routes::AppRoute;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Onboarding.title()/>
        <main class="onboarding">
            <div class="paper onboarding__card">
                <h1 class="onboarding__title">"Welcome to GenMentor"</h1>
                <p class="onboarding__subtitle">"Your AI-powered learning companion"</p>
                <p class="page__description">"Let's get started by setting up your learning profile and goals."</p>
                <p class="page__pending">"Onboarding flow will be implemented here"</p>
            </div>
        </main>
    }
}
