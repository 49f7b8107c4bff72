use super::*;

#[test]
fn from_key_finds_navigation_icon_names() {
    assert_eq!(Icon::from_key("dashboard"), Some(Icon::Dashboard));
    assert_eq!(Icon::from_key("route"), Some(Icon::Route));
    assert_eq!(Icon::from_key("insights"), Some(Icon::Insights));
    assert_eq!(Icon::from_key("menu_book"), Some(Icon::MenuBook));
    assert_eq!(Icon::from_key("person"), Some(Icon::Person));
    assert_eq!(Icon::from_key("flag"), Some(Icon::Flag));
    assert_eq!(Icon::from_key("settings"), Some(Icon::Settings));
}

#[test]
fn from_key_rejects_unknown_names() {
    assert_eq!(Icon::from_key("rocket"), None);
    assert_eq!(Icon::from_key(""), None);
    assert_eq!(Icon::from_key("Dashboard"), None);
}

#[test]
fn unknown_key_falls_back_to_dashboard() {
    assert_eq!(Icon::from_key_or_fallback("rocket"), Icon::Dashboard);
    assert_eq!(Icon::from_key_or_fallback("flag"), Icon::Flag);
}

#[test]
fn every_icon_round_trips_through_its_key() {
    for icon in Icon::ALL {
        assert_eq!(Icon::from_key(icon.key()), Some(icon), "key {}", icon.key());
    }
}

#[test]
fn keys_are_unique() {
    let mut keys: Vec<&str> = Icon::ALL.iter().map(|i| i.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Icon::ALL.len());
}

#[test]
fn every_icon_has_path_data() {
    for icon in Icon::ALL {
        let d = icon.path_data();
        assert!(!d.is_empty());
        assert!(d.starts_with('M') || d.starts_with('m'), "{icon:?} path starts with {d:?}");
    }
}
