//! Client-side route table.
//!
//! The router in `app.rs` mounts one view per variant; [`AppRoute::resolve`]
//! is the same mapping as a pure function, including the catch-all redirect.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every route the shell knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Onboarding,
    Dashboard,
    LearningPath,
    SkillGap,
    KnowledgeDocument,
    LearnerProfile,
    GoalManagement,
    Chatbot,
    Settings,
}

impl AppRoute {
    pub const ALL: [AppRoute; 10] = [
        AppRoute::Home,
        AppRoute::Onboarding,
        AppRoute::Dashboard,
        AppRoute::LearningPath,
        AppRoute::SkillGap,
        AppRoute::KnowledgeDocument,
        AppRoute::LearnerProfile,
        AppRoute::GoalManagement,
        AppRoute::Chatbot,
        AppRoute::Settings,
    ];

    /// Route every unknown path lands on.
    pub const FALLBACK: AppRoute = AppRoute::Dashboard;

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Onboarding => "/onboarding",
            Self::Dashboard => "/dashboard",
            Self::LearningPath => "/learning-path",
            Self::SkillGap => "/skill-gap",
            Self::KnowledgeDocument => "/knowledge-document",
            Self::LearnerProfile => "/learner-profile",
            Self::GoalManagement => "/goal-management",
            Self::Chatbot => "/chatbot",
            Self::Settings => "/settings",
        }
    }

    /// Path without its leading slash, as mounted in the router.
    #[must_use]
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Page title shown in the document head.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home | Self::Dashboard => "Learning Analytics",
            Self::Onboarding => "Welcome",
            Self::LearningPath => "Learning Path",
            Self::SkillGap => "Skill Gap Analysis",
            Self::KnowledgeDocument => "Knowledge Documents",
            Self::LearnerProfile => "Learner Profile",
            Self::GoalManagement => "Goal Management",
            Self::Chatbot => "AI Chatbot Tutor",
            Self::Settings => "Settings",
        }
    }

    /// Whether the page renders inside the header/navigation chrome.
    #[must_use]
    pub const fn uses_layout(self) -> bool {
        !matches!(self, Self::Onboarding)
    }

    /// Exact match of a pathname against the table. A single trailing slash
    /// is ignored; query strings and fragments must already be stripped.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// The route a pathname finally renders: `/` and unknown paths both
    /// redirect to the dashboard.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        match Self::from_path(path) {
            Some(Self::Home) | None => Self::FALLBACK,
            Some(route) => route,
        }
    }
}
