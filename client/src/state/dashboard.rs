//! Dashboard page state: a one-shot load from `Loading` to `Ready`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::time::Duration;

use crate::analytics::LearningAnalytics;

/// Simulated fetch latency before mock analytics appear.
pub const SIMULATED_LOAD_DELAY: Duration = Duration::from_millis(1000);

/// Number of placeholder cards shown while loading.
pub const SKELETON_CARDS: usize = 4;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(LearningAnalytics),
}

impl DashboardState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn analytics(&self) -> Option<&LearningAnalytics> {
        match self {
            Self::Loading => None,
            Self::Ready(analytics) => Some(analytics),
        }
    }

    /// Move to `Ready`. Returns `false` if already loaded; the load happens
    /// once per mount.
    pub fn finish_loading(&mut self, analytics: LearningAnalytics) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = Self::Ready(analytics);
        true
    }
}
