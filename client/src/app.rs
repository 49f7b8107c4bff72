//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the three shell-wide state signals (theme, notifications,
//! layout), keeps the document's theme attribute in sync, and mounts the
//! router. Every feature page nests under `MainLayout`; onboarding is the
//! one route rendered bare. `/` and unknown paths redirect to the dashboard.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::error_fallback::ErrorFallback;
use crate::components::main_layout::MainLayout;
use crate::components::notification_banner::NotificationBanner;
use crate::config::APP_NAME;
use crate::config::routes::AppRoute;
use crate::pages::{
    chatbot::ChatbotPage, dashboard::DashboardPage, goal_management::GoalManagementPage,
    knowledge_document::KnowledgeDocumentPage, learner_profile::LearnerProfilePage,
    learning_path::LearningPathPage, onboarding::OnboardingPage, settings::SettingsPage,
    skill_gap::SkillGapPage,
};
use crate::state::{layout::LayoutState, notifications::NotificationState, theme::ThemeState};
use crate::util::dark_mode;

/// Shell-wide state every page starts from: light theme, no
/// notifications, drawer open.
pub(crate) fn initial_state() -> (ThemeState, NotificationState, LayoutState) {
    (ThemeState::default(), NotificationState::new(), LayoutState::default())
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (theme, notifications, layout) = initial_state();
    let theme = RwSignal::new(theme);
    let notifications = RwSignal::new(notifications);
    let layout = RwSignal::new(layout);

    provide_context(theme);
    provide_context(notifications);
    provide_context(layout);

    Effect::new(move || dark_mode::apply(theme.get().mode()));

    let palette_style = move || theme.get().mode().palette().css_variables();
    let data_theme = move || theme.get().mode().as_str();

    view! {
        <Stylesheet id="leptos" href="/pkg/genmentor.css"/>
        <Title formatter=|text: String| format!("{text} | {APP_NAME}")/>

        <div class="app-root" style=palette_style data-theme=data_theme>
            <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors/> }>
                <Router>
                    <Routes fallback=|| view! { <Redirect path=AppRoute::FALLBACK.path()/> }>
                        <Route path=StaticSegment(AppRoute::Onboarding.segment()) view=OnboardingPage/>
                        <ParentRoute path=StaticSegment(AppRoute::Home.segment()) view=MainLayout>
                            <Route
                                path=StaticSegment(AppRoute::Home.segment())
                                view=|| view! { <Redirect path=AppRoute::FALLBACK.path()/> }
                            />
                            <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                            <Route path=StaticSegment(AppRoute::LearningPath.segment()) view=LearningPathPage/>
                            <Route path=StaticSegment(AppRoute::SkillGap.segment()) view=SkillGapPage/>
                            <Route
                                path=StaticSegment(AppRoute::KnowledgeDocument.segment())
                                view=KnowledgeDocumentPage
                            />
                            <Route path=StaticSegment(AppRoute::LearnerProfile.segment()) view=LearnerProfilePage/>
                            <Route path=StaticSegment(AppRoute::GoalManagement.segment()) view=GoalManagementPage/>
                            <Route path=StaticSegment(AppRoute::Chatbot.segment()) view=ChatbotPage/>
                            <Route path=StaticSegment(AppRoute::Settings.segment()) view=SettingsPage/>
                        </ParentRoute>
                    </Routes>
                </Router>
            </ErrorBoundary>
            <NotificationBanner/>
        </div>
    }
}
