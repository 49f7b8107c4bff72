//! Headline metric card for the dashboard.

use leptos::prelude::*;

use crate::components::icon::IconView;
use crate::icons::Icon;

/// `tone` selects the avatar colour: `primary`, `success`, `warning`, `info`.
#[component]
pub fn MetricCard(icon: Icon, tone: &'static str, label: &'static str, value: String, children: Children) -> impl IntoView {
    view! {
        <div class="card metric-card">
            <div class="metric-card__head">
                <span class=format!("metric-card__avatar metric-card__avatar--{tone}")>
                    <IconView icon=icon/>
                </span>
                <div>
                    <p class="metric-card__label">{label}</p>
                    <p class="metric-card__value">{value}</p>
                </div>
            </div>
            <div class="metric-card__footer">{children()}</div>
        </div>
    }
}
