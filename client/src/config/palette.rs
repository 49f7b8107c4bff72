//! Colour palettes for the two theme modes and for charts.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::fmt::Write as _;

/// A main/light/dark triple for one semantic colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSet {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

/// Full palette for one theme mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: ColorSet,
    pub primary_contrast: &'static str,
    pub secondary: ColorSet,
    pub secondary_contrast: &'static str,
    pub background_default: &'static str,
    pub background_paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub success: ColorSet,
    pub warning: ColorSet,
    pub error: ColorSet,
    pub info: ColorSet,
}

pub const LIGHT_PALETTE: Palette = Palette {
    primary: ColorSet { main: "#1976d2", light: "#42a5f5", dark: "#1565c0" },
    primary_contrast: "#ffffff",
    secondary: ColorSet { main: "#dc004e", light: "#ff5983", dark: "#9a0036" },
    secondary_contrast: "#ffffff",
    background_default: "#f5f5f5",
    background_paper: "#ffffff",
    text_primary: "#212121",
    text_secondary: "#757575",
    success: ColorSet { main: "#4caf50", light: "#81c784", dark: "#388e3c" },
    warning: ColorSet { main: "#ff9800", light: "#ffb74d", dark: "#f57c00" },
    error: ColorSet { main: "#f44336", light: "#ef5350", dark: "#d32f2f" },
    info: ColorSet { main: "#2196f3", light: "#64b5f6", dark: "#1976d2" },
};

pub const DARK_PALETTE: Palette = Palette {
    primary: ColorSet { main: "#90caf9", light: "#e3f2fd", dark: "#42a5f5" },
    primary_contrast: "#000000",
    secondary: ColorSet { main: "#f48fb1", light: "#fce4ec", dark: "#e91e63" },
    secondary_contrast: "#000000",
    background_default: "#121212",
    background_paper: "#1e1e1e",
    text_primary: "#ffffff",
    text_secondary: "#b3b3b3",
    success: ColorSet { main: "#66bb6a", light: "#a5d6a7", dark: "#43a047" },
    warning: ColorSet { main: "#ffb74d", light: "#ffcc80", dark: "#fb8c00" },
    error: ColorSet { main: "#ef5350", light: "#ffebee", dark: "#c62828" },
    info: ColorSet { main: "#64b5f6", light: "#e3f2fd", dark: "#1565c0" },
};

impl Palette {
    /// Render as CSS custom properties for an inline `style` attribute.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let vars: [(&str, &str); 20] = [
            ("primary", self.primary.main),
            ("primary-light", self.primary.light),
            ("primary-dark", self.primary.dark),
            ("primary-contrast", self.primary_contrast),
            ("secondary", self.secondary.main),
            ("secondary-light", self.secondary.light),
            ("secondary-dark", self.secondary.dark),
            ("secondary-contrast", self.secondary_contrast),
            ("bg-default", self.background_default),
            ("bg-paper", self.background_paper),
            ("text-primary", self.text_primary),
            ("text-secondary", self.text_secondary),
            ("success", self.success.main),
            ("success-light", self.success.light),
            ("warning", self.warning.main),
            ("warning-light", self.warning.light),
            ("error", self.error.main),
            ("error-light", self.error.light),
            ("info", self.info.main),
            ("info-light", self.info.light),
        ];
        let mut out = String::new();
        for (name, value) in vars {
            let _ = write!(out, "--gm-{name}: {value}; ");
        }
        out.trim_end().to_owned()
    }
}

/// Fixed series colours. Charts keep these across theme modes.
pub mod chart {
    pub const PRIMARY: &str = "#1976d2";
    pub const SECONDARY: &str = "#dc004e";
    pub const SUCCESS: &str = "#4caf50";
    pub const WARNING: &str = "#ff9800";
    pub const ERROR: &str = "#f44336";
    pub const INFO: &str = "#2196f3";

    /// Rotation for charts with more series than named colours.
    pub const GRADIENT: [&str; 8] = [
        "#1976d2", "#dc004e", "#4caf50", "#ff9800", "#9c27b0", "#00bcd4", "#ff5722", "#673ab7",
    ];

    /// Colour for the `index`-th series, cycling through [`GRADIENT`].
    #[must_use]
    pub fn series_color(index: usize) -> &'static str {
        GRADIENT[index % GRADIENT.len()]
    }
}
