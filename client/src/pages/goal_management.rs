//! Learning goal management page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn GoalManagementPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::GoalManagement.title()/>
        <PlaceholderPage
            title="Goal Management"
            description="Set, track, and manage your learning goals and objectives."
            pending="Goal management interface will be implemented here"
        />
    }
}
