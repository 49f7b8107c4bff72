//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome (header, side navigation,
//! notification banner) and dashboard widgets while reading/writing shared
//! state from Leptos context providers.

pub mod charts;
pub mod error_fallback;
pub mod header;
pub mod icon;
pub mod main_layout;
pub mod metric_card;
pub mod navigation;
pub mod notification_banner;
pub mod placeholder_page;
pub mod skeleton_card;
