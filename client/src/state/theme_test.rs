use super::*;

#[test]
fn default_mode_is_light() {
    let state = ThemeState::default();
    assert_eq!(state.mode(), ThemeMode::Light);
    assert!(!state.is_dark());
}

#[test]
fn toggle_flips_mode_and_returns_it() {
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(), ThemeMode::Dark);
    assert!(state.is_dark());
    assert_eq!(state.toggle(), ThemeMode::Light);
}

#[test]
fn toggling_twice_is_identity() {
    for start in [ThemeMode::Light, ThemeMode::Dark] {
        let mut state = ThemeState::new(start);
        state.toggle();
        state.toggle();
        assert_eq!(state.mode(), start);
    }
}

#[test]
fn mode_maps_to_palette() {
    assert_eq!(ThemeMode::Light.palette().background_default, "#f5f5f5");
    assert_eq!(ThemeMode::Dark.palette().background_default, "#121212");
}

#[test]
fn toggle_button_advertises_the_other_mode() {
    assert_eq!(ThemeMode::Light.toggle_icon(), Icon::DarkMode);
    assert_eq!(ThemeMode::Dark.toggle_icon(), Icon::LightMode);
    assert_eq!(ThemeMode::Light.toggle_tooltip(), "Switch to dark mode");
    assert_eq!(ThemeMode::Dark.toggle_tooltip(), "Switch to light mode");
}

#[test]
fn attribute_values() {
    assert_eq!(ThemeMode::Light.as_str(), "light");
    assert_eq!(ThemeMode::Dark.as_str(), "dark");
}
