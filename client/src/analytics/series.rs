//! Pure projections from [`LearningAnalytics`] into chart-ready series.

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

use time::Date;
use time::macros::format_description;

use super::{AnalyticsError, LearningAnalytics};
use crate::config::palette::chart;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillBar {
    pub name: String,
    pub current: f64,
    pub target: f64,
    pub progress: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub progress: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionPoint {
    pub label: String,
    pub duration: f64,
    pub completion: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

/// Numbers behind the four metric cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_time_label: String,
    pub skills_mastered: u32,
    pub skills_total: u32,
    pub mastery_percent: u32,
    pub streak_days: u32,
    pub next_milestone: &'static str,
    pub skills_remaining: u32,
}

const STREAK_DAYS: u32 = 7;
const NEXT_MILESTONE: &str = "JavaScript Expert";
const MILESTONE_SKILLS_REMAINING: u32 = 3;

#[must_use]
pub fn skill_progress_series(analytics: &LearningAnalytics) -> Vec<SkillBar> {
    analytics
        .skill_progression
        .iter()
        .map(|skill| SkillBar {
            name: skill.skill_name.clone(),
            current: f64::from(skill.current_level),
            target: f64::from(skill.target_level),
            progress: skill.progress,
        })
        .collect()
}

/// Trend points in input order, labelled by date.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidDate`] if a timestamp is not `YYYY-MM-DD`.
pub fn learning_trend_series(analytics: &LearningAnalytics) -> Result<Vec<TrendPoint>, AnalyticsError> {
    analytics
        .learning_trend
        .iter()
        .map(|point| Ok(TrendPoint { label: date_label(&point.timestamp)?, progress: point.value }))
        .collect()
}

/// Session duration and completion, labelled by date.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidDate`] if a session date is not `YYYY-MM-DD`.
pub fn session_series(analytics: &LearningAnalytics) -> Result<Vec<SessionPoint>, AnalyticsError> {
    analytics
        .session_history
        .iter()
        .map(|session| {
            Ok(SessionPoint {
                label: date_label(&session.date)?,
                duration: f64::from(session.duration),
                completion: session.completion_rate,
            })
        })
        .collect()
}

/// Static mastery buckets shown in the donut chart.
#[must_use]
pub fn skill_distribution() -> [DistributionSlice; 3] {
    [
        DistributionSlice { name: "Mastered", value: 12, color: chart::SUCCESS },
        DistributionSlice { name: "In Progress", value: 8, color: chart::WARNING },
        DistributionSlice { name: "Not Started", value: 5, color: chart::ERROR },
    ]
}

#[must_use]
pub fn dashboard_summary(analytics: &LearningAnalytics) -> DashboardSummary {
    let distribution = skill_distribution();
    let skills_mastered = distribution[0].value;
    let skills_total: u32 = distribution.iter().map(|slice| slice.value).sum();
    let mastery_percent = if skills_total == 0 { 0 } else { skills_mastered * 100 / skills_total };

    DashboardSummary {
        total_time_label: format_duration_minutes(analytics.total_time_spent),
        skills_mastered,
        skills_total,
        mastery_percent,
        streak_days: STREAK_DAYS,
        next_milestone: NEXT_MILESTONE,
        skills_remaining: MILESTONE_SKILLS_REMAINING,
    }
}

/// `1245` -> `"20h 45m"`.
#[must_use]
pub fn format_duration_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// `2024-02-05` -> `2/5/2024`.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidDate`] if `iso` is not `YYYY-MM-DD`.
pub fn date_label(iso: &str) -> Result<String, AnalyticsError> {
    let date = Date::parse(iso, format_description!("[year]-[month]-[day]"))
        .map_err(|source| AnalyticsError::InvalidDate { value: iso.to_owned(), source })?;
    Ok(format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()))
}
