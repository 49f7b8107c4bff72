//! Settings page.
//!
//! The preference editor is still pending; until then the page shows the
//! build-time configuration the shell is running with and the backend
//! endpoints the API client would call.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::placeholder_page::PlaceholderPage;
use crate::config::api::ApiEndpoint;
use crate::config::routes::AppRoute;
use crate::config::{APP_CONFIG, AppConfig};
use crate::net::api::ApiClient;

/// One label/value line of the configuration summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ConfigRow {
    pub label: &'static str,
    pub value: String,
}

/// One backend endpoint resolved against the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EndpointRow {
    pub method: &'static str,
    pub url: String,
}

fn on_off(flag: bool) -> String {
    if flag { "On" } else { "Off" }.to_owned()
}

pub(crate) fn config_rows(config: &AppConfig) -> Vec<ConfigRow> {
    let row = |label, value| ConfigRow { label, value };
    vec![
        row("Backend Endpoint", config.backend_endpoint.to_owned()),
        row("Language Model", config.llm_label().to_owned()),
        row("Mock Data", on_off(config.use_mock_data)),
        row("Dark Mode", on_off(config.features.dark_mode)),
        row("Notifications", on_off(config.features.notifications)),
        row("Analytics", on_off(config.features.analytics)),
        row("AI Chatbot", on_off(config.features.chatbot)),
    ]
}

pub(crate) fn endpoint_rows(client: &ApiClient) -> Vec<EndpointRow> {
    ApiEndpoint::ALL
        .into_iter()
        .map(|endpoint| EndpointRow { method: endpoint.method().as_str(), url: client.url(endpoint) })
        .collect()
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let client = ApiClient::from_config(&APP_CONFIG);

    let config = config_rows(&APP_CONFIG)
        .into_iter()
        .map(|row| {
            view! {
                <div class="definition">
                    <dt>{row.label}</dt>
                    <dd>{row.value}</dd>
                </div>
            }
        })
        .collect_view();

    let endpoints = endpoint_rows(&client)
        .into_iter()
        .map(|row| {
            let class = format!("chip chip--{}", row.method.to_ascii_lowercase());
            view! {
                <li class="endpoint">
                    <span class=class>{row.method}</span>
                    <code>{row.url}</code>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text=AppRoute::Settings.title()/>
        <PlaceholderPage
            title="Settings"
            description="Configure your application preferences and settings."
            pending="Settings interface will be implemented here"
        />
        <section class="page page--settings">
            <div class="card">
                <h2 class="card__title">"Configuration"</h2>
                <dl class="definitions">{config}</dl>
            </div>
            <div class="card">
                <h2 class="card__title">"Backend Endpoints"</h2>
                <ul class="endpoints">{endpoints}</ul>
            </div>
        </section>
    }
}
