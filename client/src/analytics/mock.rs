//! Fixed analytics snapshot shown until the backend endpoint is wired up.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use super::{DataPoint, LearningAnalytics, SessionHistory, SkillProgression};

fn skill(id: &str, name: &str, start: u8, current: u8, target: u8, progress: f64) -> SkillProgression {
    SkillProgression {
        skill_id: id.to_owned(),
        skill_name: name.to_owned(),
        start_level: start,
        current_level: current,
        target_level: target,
        progress,
        timestamps: Vec::new(),
    }
}

fn point(timestamp: &str, value: f64) -> DataPoint {
    DataPoint { timestamp: timestamp.to_owned(), value, label: None }
}

fn session(id: &str, date: &str, duration: u32, skill: &str, completion: f64, engagement: f64) -> SessionHistory {
    SessionHistory {
        session_id: id.to_owned(),
        date: date.to_owned(),
        duration,
        skills_covered: vec![skill.to_owned()],
        completion_rate: completion,
        engagement_score: engagement,
    }
}

#[must_use]
pub fn generate_mock_analytics() -> LearningAnalytics {
    LearningAnalytics {
        total_time_spent: 1245,
        average_session_duration: 45,
        completion_rate: 78.0,
        skill_progression: vec![
            skill("1", "JavaScript", 1, 3, 3, 100.0),
            skill("2", "React", 0, 2, 3, 67.0),
            skill("3", "TypeScript", 0, 1, 2, 50.0),
            skill("4", "Node.js", 0, 0, 2, 0.0),
        ],
        learning_trend: vec![
            point("2024-01-01", 10.0),
            point("2024-01-08", 25.0),
            point("2024-01-15", 35.0),
            point("2024-01-22", 48.0),
            point("2024-01-29", 52.0),
            point("2024-02-05", 65.0),
            point("2024-02-12", 78.0),
        ],
        session_history: vec![
            session("1", "2024-02-10", 45, "JavaScript", 100.0, 8.5),
            session("2", "2024-02-11", 60, "React", 85.0, 9.0),
            session("3", "2024-02-12", 30, "TypeScript", 70.0, 7.5),
            session("4", "2024-02-13", 50, "React", 90.0, 8.8),
            session("5", "2024-02-14", 40, "JavaScript", 95.0, 9.2),
        ],
    }
}
