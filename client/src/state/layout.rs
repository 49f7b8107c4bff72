//! Shell layout state: drawer width and header menu anchors.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::navigation::{DRAWER_WIDTH, DRAWER_WIDTH_COLLAPSED};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutState {
    pub drawer_open: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self { drawer_open: true }
    }
}

impl LayoutState {
    pub fn toggle_drawer(&mut self) -> bool {
        self.drawer_open = !self.drawer_open;
        self.drawer_open
    }

    /// Sidebar width in pixels; the main area offsets by the same amount.
    #[must_use]
    pub const fn drawer_width(&self) -> u32 {
        if self.drawer_open { DRAWER_WIDTH } else { DRAWER_WIDTH_COLLAPSED }
    }
}

/// Header dropdown flags. The two menus are independent of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderMenus {
    pub profile_open: bool,
    pub notifications_open: bool,
}

impl HeaderMenus {
    pub fn open_profile(&mut self) {
        self.profile_open = true;
    }

    pub fn open_notifications(&mut self) {
        self.notifications_open = true;
    }

    /// Any menu action or click-away closes both menus.
    pub fn close_all(&mut self) {
        self.profile_open = false;
        self.notifications_open = false;
    }

    #[must_use]
    pub const fn any_open(&self) -> bool {
        self.profile_open || self.notifications_open
    }
}
