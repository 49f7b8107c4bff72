//! Learning path page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn LearningPathPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::LearningPath.title()/>
        <PlaceholderPage
            title="Learning Path"
            description="Manage your learning sessions and track your progress through structured learning paths."
            pending="Learning path management interface will be implemented here"
        />
    }
}
