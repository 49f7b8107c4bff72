use super::*;

use crate::config::{FeatureFlags, LlmType};

fn config() -> AppConfig {
    AppConfig {
        backend_endpoint: "http://localhost:9000/",
        use_mock_data: true,
        llm_type: LlmType::Deepseek,
        features: FeatureFlags { dark_mode: true, notifications: false, analytics: true, chatbot: false },
    }
}

#[test]
fn config_rows_report_endpoint_and_model() {
    let rows = config_rows(&config());
    assert_eq!(rows[0], ConfigRow { label: "Backend Endpoint", value: "http://localhost:9000/".to_owned() });
    assert_eq!(rows[1].value, "DeepSeek");
    assert_eq!(rows[2].value, "On");
}

#[test]
fn config_rows_render_flags_as_on_off() {
    let rows = config_rows(&config());
    let flags: Vec<(&str, &str)> = rows[3..].iter().map(|r| (r.label, r.value.as_str())).collect();
    assert_eq!(
        flags,
        [("Dark Mode", "On"), ("Notifications", "Off"), ("Analytics", "On"), ("AI Chatbot", "Off")]
    );
}

#[test]
fn endpoint_rows_cover_every_endpoint() {
    let rows = endpoint_rows(&ApiClient::new("http://localhost:9000/"));
    assert_eq!(rows.len(), ApiEndpoint::ALL.len());
    assert!(rows.iter().all(|r| r.url.starts_with("http://localhost:9000/") && !r.url.contains("9000//")));
}

#[test]
fn endpoint_rows_carry_declared_method() {
    let rows = endpoint_rows(&ApiClient::new("http://localhost:9000"));
    for (row, endpoint) in rows.iter().zip(ApiEndpoint::ALL) {
        assert_eq!(row.method, endpoint.method().as_str());
        assert_eq!(row.url, format!("http://localhost:9000{}", endpoint.path()));
    }
}
