//! Icon identifiers and their SVG path data.
//!
//! DESIGN
//! ======
//! Every icon the shell renders is a variant here, so configuration that
//! names an icon is checked at compile time. String keys only enter through
//! [`Icon::from_key`], which is where unknown names are handled.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

/// Icons drawn by the shell. Path data uses a 24x24 view box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Route,
    Insights,
    MenuBook,
    Person,
    Flag,
    Settings,
    Menu,
    Notifications,
    DarkMode,
    LightMode,
    Chat,
    Logout,
    ChevronLeft,
    ChevronRight,
    ExpandLess,
    ExpandMore,
    Schedule,
    School,
    TrendingUp,
    EmojiEvents,
    PlayArrow,
    ArrowForward,
    Close,
    CheckCircle,
    ErrorCircle,
    Warning,
    Info,
}

/// Icon used when a key does not name any known icon.
pub const FALLBACK_ICON: Icon = Icon::Dashboard;

impl Icon {
    pub const ALL: [Icon; 28] = [
        Icon::Dashboard,
        Icon::Route,
        Icon::Insights,
        Icon::MenuBook,
        Icon::Person,
        Icon::Flag,
        Icon::Settings,
        Icon::Menu,
        Icon::Notifications,
        Icon::DarkMode,
        Icon::LightMode,
        Icon::Chat,
        Icon::Logout,
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::ExpandLess,
        Icon::ExpandMore,
        Icon::Schedule,
        Icon::School,
        Icon::TrendingUp,
        Icon::EmojiEvents,
        Icon::PlayArrow,
        Icon::ArrowForward,
        Icon::Close,
        Icon::CheckCircle,
        Icon::ErrorCircle,
        Icon::Warning,
        Icon::Info,
    ];

    /// Stable snake_case key, matching the Material icon font names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Route => "route",
            Self::Insights => "insights",
            Self::MenuBook => "menu_book",
            Self::Person => "person",
            Self::Flag => "flag",
            Self::Settings => "settings",
            Self::Menu => "menu",
            Self::Notifications => "notifications",
            Self::DarkMode => "dark_mode",
            Self::LightMode => "light_mode",
            Self::Chat => "chat",
            Self::Logout => "logout",
            Self::ChevronLeft => "chevron_left",
            Self::ChevronRight => "chevron_right",
            Self::ExpandLess => "expand_less",
            Self::ExpandMore => "expand_more",
            Self::Schedule => "schedule",
            Self::School => "school",
            Self::TrendingUp => "trending_up",
            Self::EmojiEvents => "emoji_events",
            Self::PlayArrow => "play_arrow",
            Self::ArrowForward => "arrow_forward",
            Self::Close => "close",
            Self::CheckCircle => "check_circle",
            Self::ErrorCircle => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Look up an icon by key. Navigation config carries `Icon` values
    /// directly, so string keys only back the unknown-key fallback contract.
    #[must_use]
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }

    /// Look up an icon by key, substituting [`FALLBACK_ICON`] for unknown keys.
    ///
    /// An unknown key is a configuration mistake, so it is logged, but the
    /// menu still renders.
    #[must_use]
    pub(crate) fn from_key_or_fallback(key: &str) -> Self {
        Self::from_key(key).unwrap_or_else(|| {
            log::warn!("unknown icon key {key:?}, using {}", FALLBACK_ICON.key());
            FALLBACK_ICON
        })
    }

    /// SVG path data for a 24x24 view box.
    #[must_use]
    pub const fn path_data(self) -> &'static str {
        match self {
            Self::Dashboard => "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z",
            Self::Route => {
                "M19 15.18V7c0-2.21-1.79-4-4-4s-4 1.79-4 4v10c0 1.1-.9 2-2 2s-2-.9-2-2V8.82C8.16 8.4 9 7.3 9 6c0-1.66-1.34-3-3-3S3 4.34 3 6c0 1.3.84 2.4 2 2.82V17c0 2.21 1.79 4 4 4s4-1.79 4-4V7c0-1.1.9-2 2-2s2 .9 2 2v8.18c-1.16.41-2 1.51-2 2.82 0 1.66 1.34 3 3 3s3-1.34 3-3c0-1.3-.84-2.4-2-2.82z"
            }
            Self::Insights => {
                "M21 8c-1.45 0-2.26 1.44-1.93 2.51l-3.55 3.56c-.3-.09-.74-.09-1.04 0l-2.55-2.55C12.27 10.45 11.46 9 10 9c-1.45 0-2.27 1.44-1.93 2.52l-4.56 4.55C2.44 15.74 1 16.55 1 18c0 1.1.9 2 2 2 1.45 0 2.26-1.44 1.93-2.51l4.55-4.56c.3.09.74.09 1.04 0l2.55 2.55C12.73 16.55 13.54 18 15 18c1.45 0 2.27-1.44 1.93-2.52l3.56-3.55c1.07.33 2.51-.48 2.51-1.93 0-1.1-.9-2-2-2z"
            }
            Self::MenuBook => {
                "M21 5c-1.11-.35-2.33-.5-3.5-.5-1.95 0-4.05.4-5.5 1.5-1.45-1.1-3.55-1.5-5.5-1.5S2.45 4.9 1 6v14.65c0 .25.25.5.5.5.1 0 .15-.05.25-.05C3.1 20.45 5.05 20 6.5 20c1.95 0 4.05.4 5.5 1.5 1.35-.85 3.8-1.5 5.5-1.5 1.65 0 3.35.3 4.75 1.05.1.05.15.05.25.05.25 0 .5-.25.5-.5V6c-.6-.45-1.25-.75-2-1zm0 13.5c-1.1-.35-2.3-.5-3.5-.5-1.7 0-4.15.65-5.5 1.5V8c1.35-.85 3.8-1.5 5.5-1.5 1.2 0 2.4.15 3.5.5v11.5z"
            }
            Self::Person => "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z",
            Self::Flag => "M14.4 6 14 4H5v17h2v-7h5.6l.4 2h7V6z",
            Self::Settings => {
                "M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58a.49.49 0 0 0 .12-.61l-1.92-3.32a.488.488 0 0 0-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54a.484.484 0 0 0-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58a.49.49 0 0 0-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z"
            }
            Self::Menu => "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
            Self::Notifications => {
                "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z"
            }
            Self::DarkMode => {
                "M12 3c-4.97 0-9 4.03-9 9s4.03 9 9 9 9-4.03 9-9c0-.46-.04-.92-.1-1.36-.98 1.37-2.58 2.26-4.4 2.26-2.98 0-5.4-2.42-5.4-5.4 0-1.81.89-3.42 2.26-4.4-.44-.06-.9-.1-1.36-.1z"
            }
            Self::LightMode => {
                "M12 7c-2.76 0-5 2.24-5 5s2.24 5 5 5 5-2.24 5-5-2.24-5-5-5zM2 13h2c.55 0 1-.45 1-1s-.45-1-1-1H2c-.55 0-1 .45-1 1s.45 1 1 1zm18 0h2c.55 0 1-.45 1-1s-.45-1-1-1h-2c-.55 0-1 .45-1 1s.45 1 1 1zM11 2v2c0 .55.45 1 1 1s1-.45 1-1V2c0-.55-.45-1-1-1s-1 .45-1 1zm0 18v2c0 .55.45 1 1 1s1-.45 1-1v-2c0-.55-.45-1-1-1s-1 .45-1 1z"
            }
            Self::Chat => "M20 2H4c-1.1 0-1.99.9-1.99 2L2 22l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 9h12v2H6V9zm8 5H6v-2h8v2zm4-6H6V6h12v2z",
            Self::Logout => "M17 7l-1.41 1.41L18.17 11H8v2h10.17l-2.58 2.58L17 17l5-5zM4 5h8V3H4c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h8v-2H4V5z",
            Self::ChevronLeft => "M15.41 7.41 14 6l-6 6 6 6 1.41-1.41L10.83 12z",
            Self::ChevronRight => "M10 6 8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z",
            Self::ExpandLess => "m12 8-6 6 1.41 1.41L12 10.83l4.59 4.58L18 14z",
            Self::ExpandMore => "M16.59 8.59 12 13.17 7.41 8.59 6 10l6 6 6-6z",
            Self::Schedule => {
                "M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 20c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67z"
            }
            Self::School => "M5 13.18v4L12 21l7-3.82v-4L12 17l-7-3.82zM12 3 1 9l11 6 9-4.91V17h2V9L12 3z",
            Self::TrendingUp => "m16 6 2.29 2.29-4.88 4.88-4-4L2 16.59 3.41 18l6-6 4 4 6.3-6.29L22 12V6z",
            Self::EmojiEvents => {
                "M19 5h-2V3H7v2H5c-1.1 0-2 .9-2 2v1c0 2.55 1.92 4.63 4.39 4.94.63 1.5 1.98 2.63 3.61 2.96V19H7v2h10v-2h-4v-3.1c1.63-.33 2.98-1.46 3.61-2.96C19.08 12.63 21 10.55 21 8V7c0-1.1-.9-2-2-2zM5 8V7h2v3.82C5.84 10.4 5 9.3 5 8zm14 0c0 1.3-.84 2.4-2 2.82V7h2v1z"
            }
            Self::PlayArrow => "M8 5v14l11-7z",
            Self::ArrowForward => "m12 4-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z",
            Self::Close => "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
            Self::CheckCircle => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
            Self::ErrorCircle => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z",
            Self::Warning => "M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z",
            Self::Info => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
        }
    }
}
