use super::*;

#[test]
fn paths_are_unique_and_rooted_under_api() {
    let mut paths: Vec<&str> = ApiEndpoint::ALL.iter().map(|e| e.path()).collect();
    assert!(paths.iter().all(|p| p.starts_with("/api/")));
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), ApiEndpoint::ALL.len());
}

#[test]
fn skill_gap_endpoints() {
    assert_eq!(ApiEndpoint::IdentifySkillGap.path(), "/api/skill-gap/identify");
    assert_eq!(ApiEndpoint::GetSkillGaps.path(), "/api/skill-gap/list");
    assert_eq!(ApiEndpoint::UpdateSkillGap.path(), "/api/skill-gap/update");
}

#[test]
fn session_complete_is_nested_under_learning_path() {
    assert_eq!(ApiEndpoint::CompleteSession.path(), "/api/learning-path/session/complete");
}

#[test]
fn reads_use_get() {
    assert_eq!(ApiEndpoint::GetAnalytics.method(), HttpMethod::Get);
    assert_eq!(ApiEndpoint::GetChatHistory.method(), HttpMethod::Get);
    assert_eq!(ApiEndpoint::GetDocument.method(), HttpMethod::Get);
}

#[test]
fn mutations_use_post() {
    assert_eq!(ApiEndpoint::SendMessage.method(), HttpMethod::Post);
    assert_eq!(ApiEndpoint::ClearChat.method(), HttpMethod::Post);
    assert_eq!(ApiEndpoint::DeleteDocument.method(), HttpMethod::Post);
    assert_eq!(ApiEndpoint::UploadDocument.method(), HttpMethod::Post);
}

#[test]
fn every_get_endpoint_is_a_read_path() {
    for endpoint in ApiEndpoint::ALL.into_iter().filter(|e| e.method() == HttpMethod::Get) {
        let last = endpoint.path().rsplit('/').next().unwrap_or_default();
        assert!(
            matches!(last, "list" | "get" | "dashboard" | "progress" | "sessions" | "history"),
            "{endpoint:?} ends with {last}"
        );
    }
}

#[test]
fn method_strings() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
    assert_eq!(HttpMethod::Post.as_str(), "POST");
}
