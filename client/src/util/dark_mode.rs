//! Theme attribute sync.
//!
//! Applies a `data-theme` attribute to the `<html>` element so stylesheet
//! rules keyed on it follow the current [`ThemeMode`]. Nothing is persisted:
//! every page load starts in light mode.
//!
//! TRADE-OFFS
//! ==========
//! DOM access is browser-only; SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if el.set_attribute("data-theme", mode.as_str()).is_err() {
                    log::warn!("failed to set data-theme={}", mode.as_str());
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
