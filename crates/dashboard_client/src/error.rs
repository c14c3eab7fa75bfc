use serde_json::Value;
use thiserror::Error;

use crate::TransportFailure;

/// User-facing classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    BadGateway,
    ServiceUnavailable,
    Timeout,
    NetworkError,
    Unknown,
}

impl ErrorKind {
    /// Kind for an HTTP status with a dedicated message, if any.
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            500 => Some(Self::ServerError),
            502 => Some(Self::BadGateway),
            503 => Some(Self::ServiceUnavailable),
            _ => None,
        }
    }

    /// Localized message shown to the user for this kind.
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::BadRequest => "请求参数错误",
            Self::Unauthorized => "未授权，请重新登录",
            Self::Forbidden => "拒绝访问",
            Self::NotFound => "请求的资源不存在",
            Self::ServerError => "服务器内部错误",
            Self::BadGateway => "网关错误",
            Self::ServiceUnavailable => "服务不可用",
            Self::Timeout => "请求超时",
            Self::NetworkError => "网络连接失败",
            Self::Unknown => "网络错误",
        }
    }
}

/// What originally went wrong.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorCause {
    /// The backend answered with `success: false`.
    Envelope {
        error: Option<String>,
        detail: Option<String>,
        body: Value,
    },
    /// HTTP status outside 2xx, network failure, or request construction error.
    Transport(TransportFailure),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct NormalizedError {
    pub message: String,
    pub kind: ErrorKind,
    pub cause: ErrorCause,
}

impl NormalizedError {
    pub fn is_envelope(&self) -> bool {
        matches!(self.cause, ErrorCause::Envelope { .. })
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match &self.cause {
            ErrorCause::Transport(failure) => failure.status,
            ErrorCause::Envelope { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base url '{value}': {message}")]
    InvalidBaseUrl { value: String, message: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}
