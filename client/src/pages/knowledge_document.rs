//! Knowledge document library page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::routes::AppRoute;

#[component]
pub fn KnowledgeDocumentPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::KnowledgeDocument.title()/>
        <PlaceholderPage
            title="Knowledge Documents"
            description="Access and manage your learning materials and knowledge documents."
            pending="Knowledge document management interface will be implemented here"
        />
    }
}
