use super::*;

use serde_json::json;

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn success_envelope_with_data() {
    let resp: ApiResponse<Vec<String>> =
        serde_json::from_value(json!({ "success": true, "data": ["a", "b"] })).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data, Some(vec!["a".to_owned(), "b".to_owned()]));
    assert_eq!(resp.failure_reason(), None);
}

#[test]
fn failure_envelope_prefers_error_over_message() {
    let resp: ApiResponse<()> =
        serde_json::from_value(json!({ "success": false, "error": "bad input", "message": "try again" })).unwrap();
    assert_eq!(resp.failure_reason(), Some("bad input"));

    let resp: ApiResponse<()> = serde_json::from_value(json!({ "success": false, "message": "try again" })).unwrap();
    assert_eq!(resp.failure_reason(), Some("try again"));
}

#[test]
fn missing_optional_fields_are_omitted_on_output() {
    let resp: ApiResponse<u32> = ApiResponse { success: true, data: Some(3), error: None, message: None };
    assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "success": true, "data": 3 }));
}

// =============================================================
// PaginatedResponse
// =============================================================

#[test]
fn paginated_uses_camel_case_keys() {
    let page: PaginatedResponse<u32> = serde_json::from_value(json!({
        "items": [1, 2],
        "total": 12,
        "page": 1,
        "pageSize": 2,
        "totalPages": 6
    }))
    .unwrap();
    assert_eq!(page.items, [1, 2]);
    assert_eq!(page.page_size, 2);
    assert_eq!(page.total_pages, 6);
    assert!(page.has_next_page());
}

#[test]
fn last_page_has_no_next() {
    let page = PaginatedResponse::<u32> { items: vec![], total: 0, page: 3, page_size: 10, total_pages: 3 };
    assert!(!page.has_next_page());
}
