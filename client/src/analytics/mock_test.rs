use super::*;

#[test]
fn headline_numbers() {
    let analytics = generate_mock_analytics();
    assert_eq!(analytics.total_time_spent, 1245);
    assert_eq!(analytics.average_session_duration, 45);
    assert!((analytics.completion_rate - 78.0).abs() < f64::EPSILON);
}

#[test]
fn four_skills_in_order() {
    let names: Vec<String> =
        generate_mock_analytics().skill_progression.into_iter().map(|s| s.skill_name).collect();
    assert_eq!(names, ["JavaScript", "React", "TypeScript", "Node.js"]);
}

#[test]
fn skill_levels_stay_within_target() {
    for skill in generate_mock_analytics().skill_progression {
        assert!(skill.start_level <= skill.current_level, "{}", skill.skill_name);
        assert!(skill.current_level <= skill.target_level, "{}", skill.skill_name);
    }
}

#[test]
fn trend_is_weekly_and_increasing() {
    let trend = generate_mock_analytics().learning_trend;
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].timestamp, "2024-01-01");
    assert_eq!(trend[6].timestamp, "2024-02-12");
    assert!(trend.windows(2).all(|w| w[0].value < w[1].value));
}

#[test]
fn five_consecutive_sessions() {
    let sessions = generate_mock_analytics().session_history;
    let durations: Vec<u32> = sessions.iter().map(|s| s.duration).collect();
    assert_eq!(durations, [45, 60, 30, 50, 40]);
    assert_eq!(sessions[0].date, "2024-02-10");
    assert_eq!(sessions[4].date, "2024-02-14");
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(generate_mock_analytics()).unwrap();
    assert_eq!(json["totalTimeSpent"], 1245);
    assert_eq!(json["skillProgression"][1]["skillName"], "React");
    assert_eq!(json["sessionHistory"][0]["engagementScore"], 8.5);
}
