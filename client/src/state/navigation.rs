//! Sidebar navigation: expansion state, active matching, row presentation.
//!
//! The default tree has no nested items, but the rules below apply to any
//! depth so a registry with children renders correctly.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::collections::HashSet;

use crate::config::navigation::NavigationItem;

/// Left padding added per nesting level when the drawer is open.
pub const INDENT_STEP_PX: u32 = 16;
const BASE_INDENT_PX: u32 = 16;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    expanded: HashSet<&'static str>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip expansion for an item id. Returns the new state.
    pub fn toggle_expanded(&mut self, id: &'static str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

/// Exact path match; `/dashboard/x` does not activate `/dashboard`.
#[must_use]
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

/// Ids of every item (at any depth) whose path matches `current_path`.
#[must_use]
pub(crate) fn active_item_ids(items: &[NavigationItem], current_path: &str) -> Vec<&'static str> {
    let mut out = Vec::new();
    collect_active(items, current_path, &mut out);
    out
}

fn collect_active(items: &[NavigationItem], current_path: &str, out: &mut Vec<&'static str>) {
    for item in items {
        if is_active(current_path, item.path) {
            out.push(item.id);
        }
        collect_active(item.children, current_path, out);
    }
}

/// How a single sidebar row renders for a given drawer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowPresentation {
    pub show_label: bool,
    /// Present only while the drawer is collapsed.
    pub tooltip: Option<&'static str>,
    pub show_expand_icon: bool,
    pub indent_px: u32,
}

#[must_use]
pub fn row_presentation(item: &NavigationItem, depth: usize, drawer_open: bool) -> RowPresentation {
    let depth = u32::try_from(depth).unwrap_or(u32::MAX / INDENT_STEP_PX);
    RowPresentation {
        show_label: drawer_open,
        tooltip: if drawer_open { None } else { Some(item.tooltip()) },
        show_expand_icon: drawer_open && item.has_children(),
        indent_px: if drawer_open { BASE_INDENT_PX + depth.saturating_mul(INDENT_STEP_PX) } else { BASE_INDENT_PX },
    }
}

/// Flatten the tree into rendered rows. Children appear only when their
/// parent is expanded and the drawer is open.
#[must_use]
pub fn visible_rows<'a>(
    items: &'a [NavigationItem],
    state: &NavigationState,
    drawer_open: bool,
) -> Vec<(usize, &'a NavigationItem)> {
    let mut rows = Vec::new();
    push_rows(items, 0, state, drawer_open, &mut rows);
    rows
}

fn push_rows<'a>(
    items: &'a [NavigationItem],
    depth: usize,
    state: &NavigationState,
    drawer_open: bool,
    rows: &mut Vec<(usize, &'a NavigationItem)>,
) {
    for item in items {
        rows.push((depth, item));
        if drawer_open && item.has_children() && state.is_expanded(item.id) {
            push_rows(item.children, depth + 1, state, drawer_open, rows);
        }
    }
}
