//! Side navigation tree.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use super::routes::AppRoute;
use crate::icons::Icon;

/// One row of the side navigation. Children form a statically authored tree;
/// depth is only used for indentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub id: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub icon: Icon,
    pub description: Option<&'static str>,
    pub children: &'static [NavigationItem],
}

impl NavigationItem {
    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Text shown in the hover tooltip while the drawer is collapsed.
    #[must_use]
    pub fn tooltip(&self) -> &'static str {
        self.description.unwrap_or(self.label)
    }
}

pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        id: "dashboard",
        label: "Dashboard",
        path: AppRoute::Dashboard.path(),
        icon: Icon::Dashboard,
        description: Some("View your learning analytics and progress"),
        children: &[],
    },
    NavigationItem {
        id: "learning-path",
        label: "Learning Path",
        path: AppRoute::LearningPath.path(),
        icon: Icon::Route,
        description: Some("Manage your learning sessions and track progress"),
        children: &[],
    },
    NavigationItem {
        id: "skill-gap",
        label: "Skill Gap",
        path: AppRoute::SkillGap.path(),
        icon: Icon::Insights,
        description: Some("Identify and analyze your skill gaps"),
        children: &[],
    },
    NavigationItem {
        id: "knowledge-document",
        label: "Knowledge Documents",
        path: AppRoute::KnowledgeDocument.path(),
        icon: Icon::MenuBook,
        description: Some("Access and manage learning materials"),
        children: &[],
    },
    NavigationItem {
        id: "learner-profile",
        label: "My Profile",
        path: AppRoute::LearnerProfile.path(),
        icon: Icon::Person,
        description: Some("View and update your learner profile"),
        children: &[],
    },
    NavigationItem {
        id: "goal-management",
        label: "Goal Management",
        path: AppRoute::GoalManagement.path(),
        icon: Icon::Flag,
        description: Some("Set and manage your learning goals"),
        children: &[],
    },
];

/// Pinned entry rendered below the main tree.
pub const SETTINGS_ITEM: NavigationItem = NavigationItem {
    id: "settings",
    label: "Settings",
    path: AppRoute::Settings.path(),
    icon: Icon::Settings,
    description: None,
    children: &[],
};

/// Drawer width in pixels while open.
pub const DRAWER_WIDTH: u32 = 280;
/// Drawer width in pixels while collapsed to icons.
pub const DRAWER_WIDTH_COLLAPSED: u32 = 72;
