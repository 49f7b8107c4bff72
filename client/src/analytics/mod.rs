//! Learning analytics model and its dashboard projections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fabricates a [`LearningAnalytics`] snapshot with
//! [`mock::generate_mock_analytics`] and renders chart series derived by the
//! pure functions in [`series`]. Field names follow the REST payload
//! (`camelCase`) so a live `/api/analytics/dashboard` response deserializes
//! into the same types.

pub mod mock;
pub mod series;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningAnalytics {
    /// Minutes.
    pub total_time_spent: u32,
    pub average_session_duration: u32,
    pub completion_rate: f64,
    pub skill_progression: Vec<SkillProgression>,
    pub learning_trend: Vec<DataPoint>,
    pub session_history: Vec<SessionHistory>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgression {
    pub skill_id: String,
    pub skill_name: String,
    pub start_level: u8,
    pub current_level: u8,
    pub target_level: u8,
    /// Percent toward the target level.
    pub progress: f64,
    #[serde(default)]
    pub timestamps: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// ISO date, `YYYY-MM-DD`.
    pub timestamp: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistory {
    pub session_id: String,
    pub date: String,
    /// Minutes.
    pub duration: u32,
    pub skills_covered: Vec<String>,
    pub completion_rate: f64,
    pub engagement_score: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}
