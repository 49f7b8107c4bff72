//! Light/dark theme state.
//!
//! Session-only: the mode starts light on every load and is never persisted.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::palette::{DARK_PALETTE, LIGHT_PALETTE, Palette};
use crate::icons::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Icon on the toggle button: it shows the mode a click switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> Icon {
        match self {
            Self::Light => Icon::DarkMode,
            Self::Dark => Icon::LightMode,
        }
    }

    #[must_use]
    pub const fn toggle_tooltip(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

/// Theme provider state. [`ThemeState::toggle`] is the only mutator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    #[must_use]
    pub const fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.mode, ThemeMode::Dark)
    }

    /// Flip the mode and return the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}
