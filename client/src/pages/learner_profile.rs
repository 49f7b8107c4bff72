//! Learner profile page ("My Profile").

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn LearnerProfilePage() -> impl IntoView {
    view! {
        <Title text=AppRoute::LearnerProfile.title()/>
        <PlaceholderPage
            title="My Profile"
            description="View and manage your learner profile, preferences, and learning history."
            pending="Learner profile management interface will be implemented here"
        />
    }
}
