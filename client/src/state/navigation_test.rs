use super::*;

use crate::config::navigation::NAVIGATION_ITEMS;
use crate::icons::Icon;

const LEAVES: &[NavigationItem] = &[
    NavigationItem {
        id: "basics",
        label: "Basics",
        path: "/courses/basics",
        icon: Icon::School,
        description: None,
        children: &[],
    },
    NavigationItem {
        id: "advanced",
        label: "Advanced",
        path: "/courses/advanced",
        icon: Icon::TrendingUp,
        description: Some("Harder material"),
        children: &[],
    },
];

const TREE: &[NavigationItem] = &[
    NavigationItem {
        id: "home",
        label: "Home",
        path: "/home",
        icon: Icon::Dashboard,
        description: Some("Start here"),
        children: &[],
    },
    NavigationItem {
        id: "courses",
        label: "Courses",
        path: "/courses",
        icon: Icon::MenuBook,
        description: None,
        children: LEAVES,
    },
];

fn ids(rows: &[(usize, &NavigationItem)]) -> Vec<(usize, &'static str)> {
    rows.iter().map(|(depth, item)| (*depth, item.id)).collect()
}

// =============================================================
// expansion
// =============================================================

#[test]
fn toggle_expanded_flips() {
    let mut state = NavigationState::new();
    assert!(!state.is_expanded("courses"));
    assert!(state.toggle_expanded("courses"));
    assert!(state.is_expanded("courses"));
    assert!(!state.toggle_expanded("courses"));
    assert!(!state.is_expanded("courses"));
}

#[test]
fn collapsed_parent_hides_children() {
    let state = NavigationState::new();
    let rows = visible_rows(TREE, &state, true);
    assert_eq!(ids(&rows), [(0, "home"), (0, "courses")]);
}

#[test]
fn expanded_parent_shows_children_one_level_deeper() {
    let mut state = NavigationState::new();
    state.toggle_expanded("courses");
    let rows = visible_rows(TREE, &state, true);
    assert_eq!(ids(&rows), [(0, "home"), (0, "courses"), (1, "basics"), (1, "advanced")]);
}

#[test]
fn closed_drawer_hides_children_even_when_expanded() {
    let mut state = NavigationState::new();
    state.toggle_expanded("courses");
    let rows = visible_rows(TREE, &state, false);
    assert_eq!(ids(&rows), [(0, "home"), (0, "courses")]);
}

#[test]
fn default_registry_renders_flat() {
    let rows = visible_rows(NAVIGATION_ITEMS, &NavigationState::new(), true);
    assert_eq!(rows.len(), NAVIGATION_ITEMS.len());
    assert!(rows.iter().all(|(depth, _)| *depth == 0));
}

// =============================================================
// active matching
// =============================================================

#[test]
fn active_match_is_exact() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(!is_active("/dashboard/extra", "/dashboard"));
    assert!(!is_active("/", "/dashboard"));
}

#[test]
fn active_ids_search_nested_items() {
    assert_eq!(active_item_ids(TREE, "/courses/advanced"), ["advanced"]);
    assert_eq!(active_item_ids(TREE, "/home"), ["home"]);
    assert!(active_item_ids(TREE, "/missing").is_empty());
}

#[test]
fn each_registry_path_activates_exactly_its_item() {
    for item in NAVIGATION_ITEMS {
        assert_eq!(active_item_ids(NAVIGATION_ITEMS, item.path), [item.id], "{}", item.path);
    }
    assert!(active_item_ids(NAVIGATION_ITEMS, "/unknown-path").is_empty());
}

// =============================================================
// row presentation
// =============================================================

#[test]
fn open_drawer_shows_label_without_tooltip() {
    let row = row_presentation(&TREE[0], 0, true);
    assert!(row.show_label);
    assert_eq!(row.tooltip, None);
    assert!(!row.show_expand_icon);
}

#[test]
fn collapsed_drawer_uses_description_tooltip() {
    let row = row_presentation(&TREE[0], 0, false);
    assert!(!row.show_label);
    assert_eq!(row.tooltip, Some("Start here"));
}

#[test]
fn tooltip_falls_back_to_label() {
    let row = row_presentation(&TREE[1], 0, false);
    assert_eq!(row.tooltip, Some("Courses"));
}

#[test]
fn expand_icon_only_for_parents_in_open_drawer() {
    assert!(row_presentation(&TREE[1], 0, true).show_expand_icon);
    assert!(!row_presentation(&TREE[1], 0, false).show_expand_icon);
    assert!(!row_presentation(&LEAVES[0], 1, true).show_expand_icon);
}

#[test]
fn nested_rows_indent_per_level() {
    let top = row_presentation(&TREE[1], 0, true).indent_px;
    let child = row_presentation(&LEAVES[0], 1, true).indent_px;
    assert_eq!(child - top, INDENT_STEP_PX);
    assert_eq!(row_presentation(&LEAVES[0], 1, false).indent_px, top);
}
