//! AI tutor chat page, reachable from the header shortcut.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Chatbot.title()/>
        <PlaceholderPage
            title="AI Chatbot Tutor"
            description="Get personalized assistance and answers to your learning questions."
            pending="AI chatbot tutor interface will be implemented here"
        />
    }
}
