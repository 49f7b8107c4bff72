use super::*;

use crate::analytics::mock::generate_mock_analytics;

#[test]
fn starts_loading() {
    let state = DashboardState::default();
    assert!(state.is_loading());
    assert!(state.analytics().is_none());
}

#[test]
fn finish_loading_once() {
    let mut state = DashboardState::default();
    assert!(state.finish_loading(generate_mock_analytics()));
    assert!(!state.is_loading());
    assert_eq!(state.analytics().map(|a| a.total_time_spent), Some(1245));

    let mut other = generate_mock_analytics();
    other.total_time_spent = 1;
    assert!(!state.finish_loading(other));
    assert_eq!(state.analytics().map(|a| a.total_time_spent), Some(1245));
}

#[test]
fn load_constants() {
    assert_eq!(SIMULATED_LOAD_DELAY.as_millis(), 1000);
    assert_eq!(SKELETON_CARDS, 4);
}
