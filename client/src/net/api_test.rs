use super::*;

use crate::config::APP_CONFIG;

// =============================================================
// urls
// =============================================================

#[test]
fn url_joins_without_double_slash() {
    let client = ApiClient::new("http://127.0.0.1:5006/");
    assert_eq!(client.url(ApiEndpoint::GetAnalytics), "http://127.0.0.1:5006/api/analytics/dashboard");

    let client = ApiClient::new("http://127.0.0.1:5006");
    assert_eq!(client.url(ApiEndpoint::ClearChat), "http://127.0.0.1:5006/api/chat/clear");
}

#[test]
fn from_config_uses_backend_endpoint() {
    let client = ApiClient::from_config(&APP_CONFIG);
    assert_eq!(client.base_url(), "http://127.0.0.1:5006/");
}

// =============================================================
// method checks
// =============================================================

#[test]
fn method_check_accepts_matching_verb() {
    assert_eq!(check_method(ApiEndpoint::GetDocuments, HttpMethod::Get), Ok(()));
    assert_eq!(check_method(ApiEndpoint::UploadDocument, HttpMethod::Post), Ok(()));
}

#[test]
fn method_check_rejects_wrong_verb() {
    let err = check_method(ApiEndpoint::DeleteDocument, HttpMethod::Get).unwrap_err();
    assert_eq!(err, ApiError::MethodMismatch { path: "/api/document/delete", expected: "POST" });
    assert_eq!(err.to_string(), "/api/document/delete expects POST");
}

// =============================================================
// envelopes
// =============================================================

#[test]
fn unwrap_envelope_returns_data() {
    let resp = ApiResponse { success: true, data: Some(7_u32), error: None, message: None };
    assert_eq!(unwrap_envelope(resp), Ok(7));
}

#[test]
fn unwrap_envelope_reports_rejection() {
    let resp: ApiResponse<u32> =
        ApiResponse { success: false, data: None, error: None, message: Some("goal not found".into()) };
    assert_eq!(unwrap_envelope(resp), Err(ApiError::Rejected("goal not found".into())));
}

#[test]
fn unwrap_envelope_without_reason() {
    let resp: ApiResponse<u32> = ApiResponse { success: false, data: None, error: None, message: None };
    assert_eq!(unwrap_envelope(resp), Err(ApiError::Rejected("unknown error".into())));
}

#[test]
fn unwrap_envelope_requires_data_on_success() {
    let resp: ApiResponse<u32> = ApiResponse { success: true, data: None, error: None, message: None };
    assert_eq!(unwrap_envelope(resp), Err(ApiError::MissingData));
}

#[test]
fn error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn server_side_calls_are_unavailable() {
    let client = ApiClient::from_config(&APP_CONFIG);
    let got: Result<u32, ApiError> = client.get(ApiEndpoint::GetAnalytics, &[]).await;
    assert_eq!(got, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn wrong_verb_fails_before_transport() {
    let client = ApiClient::from_config(&APP_CONFIG);
    let got: Result<u32, ApiError> = client.get(ApiEndpoint::SendMessage, &[]).await;
    assert!(matches!(got, Err(ApiError::MethodMismatch { .. })));
}
