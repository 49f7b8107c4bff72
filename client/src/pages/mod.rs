//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Only the dashboard holds state of its own; the other
//! feature pages are placeholders sharing `PlaceholderPage`.

pub mod chatbot;
pub mod dashboard;
pub mod goal_management;
pub mod knowledge_document;
pub mod learner_profile;
pub mod learning_path;
pub mod onboarding;
pub mod settings;
pub mod skill_gap;
