use dashboard_client::{normalize, ErrorCause, ErrorKind, ResponseEnvelope, DEFAULT_FAILURE_MESSAGE};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn success_returns_whole_body() {
    let body = json!({ "success": true, "data": { "CN": 0.7 }, "total": 3 });

    assert_eq!(normalize(body.clone()), Ok(body));
}

#[test]
fn missing_or_non_boolean_success_is_not_failure() {
    for body in [
        json!({ "data": [1, 2] }),
        json!({ "success": "false" }),
        json!({ "success": null, "error": "ignored" }),
        json!([1, 2, 3]),
        json!("plain text"),
        json!(null),
    ] {
        assert_eq!(normalize(body.clone()), Ok(body));
    }
}

#[test]
fn failure_prefers_error_field() {
    let err = normalize(json!({ "success": false, "error": "bad keyword", "detail": "x" }))
        .unwrap_err();

    assert_eq!(err.message, "bad keyword");
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert!(err.is_envelope());
    assert_eq!(err.status(), None);
}

#[test]
fn failure_falls_back_to_detail() {
    let err = normalize(json!({ "success": false, "detail": "quota exhausted" })).unwrap_err();
    assert_eq!(err.message, "quota exhausted");

    let err = normalize(json!({ "success": false, "error": "", "detail": "empty error skipped" }))
        .unwrap_err();
    assert_eq!(err.message, "empty error skipped");
}

#[test]
fn failure_without_text_uses_default() {
    let body = json!({ "success": false, "data": null });
    let err = normalize(body.clone()).unwrap_err();

    assert_eq!(err.message, DEFAULT_FAILURE_MESSAGE);
    assert_eq!(
        err.cause,
        ErrorCause::Envelope {
            error: None,
            detail: None,
            body,
        }
    );
}

#[test]
fn structured_detail_is_rendered_as_json() {
    let envelope = ResponseEnvelope::from_value(&json!({
        "success": false,
        "detail": [{ "loc": ["query", "page"] }]
    }));

    assert!(envelope.is_failure());
    assert_eq!(envelope.failure_message(), r#"[{"loc":["query","page"]}]"#);
}
