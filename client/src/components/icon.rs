//! Inline SVG rendering for [`Icon`].

use leptos::prelude::*;

use crate::icons::Icon;

/// 24x24 Material glyph. Colour follows `currentColor`.
#[component]
pub fn IconView(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg class=class viewBox="0 0 24 24" width="24" height="24" fill="currentColor" aria-hidden="true">
            <path d=icon.path_data()></path>
        </svg>
    }
}
