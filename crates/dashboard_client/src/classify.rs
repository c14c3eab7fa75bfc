use crate::{ErrorCause, ErrorKind, NormalizedError, TransportFailure};

/// Maps a transport failure to a user-facing error. First match wins:
/// HTTP status, then "timeout" in the message, then "Network Error".
pub fn classify(failure: &TransportFailure) -> NormalizedError {
    let (kind, message) = match failure.status {
        Some(status) => match ErrorKind::from_status(status) {
            Some(kind) => (kind, kind.user_message().to_string()),
            None => (ErrorKind::Unknown, format!("连接错误 {status}")),
        },
        None if failure.message.contains("timeout") => {
            (ErrorKind::Timeout, ErrorKind::Timeout.user_message().to_string())
        }
        None if failure.message.contains("Network Error") => (
            ErrorKind::NetworkError,
            ErrorKind::NetworkError.user_message().to_string(),
        ),
        None => (ErrorKind::Unknown, ErrorKind::Unknown.user_message().to_string()),
    };

    NormalizedError {
        message,
        kind,
        cause: ErrorCause::Transport(failure.clone()),
    }
}
