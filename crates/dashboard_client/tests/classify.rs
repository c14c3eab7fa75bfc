use dashboard_client::{classify, ErrorCause, ErrorKind, TransportFailure};

#[test]
fn mapped_statuses_get_exact_messages() {
    let cases = [
        (400, ErrorKind::BadRequest, "请求参数错误"),
        (401, ErrorKind::Unauthorized, "未授权，请重新登录"),
        (403, ErrorKind::Forbidden, "拒绝访问"),
        (404, ErrorKind::NotFound, "请求的资源不存在"),
        (500, ErrorKind::ServerError, "服务器内部错误"),
        (502, ErrorKind::BadGateway, "网关错误"),
        (503, ErrorKind::ServiceUnavailable, "服务不可用"),
    ];

    for (status, kind, message) in cases {
        let err = classify(&TransportFailure::http_status(status, ""));
        assert_eq!(err.kind, kind, "status {status}");
        assert_eq!(err.message, message, "status {status}");
        assert_eq!(err.status(), Some(status));
    }
}

#[test]
fn unmapped_status_embeds_code() {
    let err = classify(&TransportFailure::http_status(418, "teapot"));

    assert_eq!(err.kind, ErrorKind::Unknown);
    assert_eq!(err.message, "连接错误 418");
    assert_eq!(err.to_string(), "连接错误 418");
}

#[test]
fn status_wins_over_message_text() {
    let failure = TransportFailure {
        status: Some(504),
        message: "timeout of 30000ms exceeded".to_string(),
        body: None,
    };

    let err = classify(&failure);
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert_eq!(err.message, "连接错误 504");
}

#[test]
fn timeout_without_response() {
    let err = classify(&TransportFailure::message("timeout of 30000ms exceeded"));

    assert_eq!(err.kind, ErrorKind::Timeout);
    assert_eq!(err.message, "请求超时");
}

#[test]
fn network_error_without_response() {
    let err = classify(&TransportFailure::message("Network Error: connection refused"));

    assert_eq!(err.kind, ErrorKind::NetworkError);
    assert_eq!(err.message, "网络连接失败");
}

#[test]
fn anything_else_is_generic() {
    let failure = TransportFailure::message("request path must be relative");
    let err = classify(&failure);

    assert_eq!(err.kind, ErrorKind::Unknown);
    assert_eq!(err.message, "网络错误");
    assert_eq!(err.cause, ErrorCause::Transport(failure));
    assert!(!err.is_envelope());
}
