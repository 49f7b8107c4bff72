//! Skill gap analysis page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn SkillGapPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::SkillGap.title()/>
        <PlaceholderPage
            title="Skill Gap Analysis"
            description="Identify and analyze your skill gaps to create personalized learning paths."
            pending="Skill gap identification and visualization will be implemented here"
        />
    }
}
