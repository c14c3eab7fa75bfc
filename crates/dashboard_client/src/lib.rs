//! Dashboard client: request pipeline, response normalization and API groups.
pub mod api;
mod classify;
mod client;
mod config;
mod envelope;
mod error;
mod notify;
mod outbound;
mod transport;
mod types;

pub use api::{CommonApi, CrawlerApi, HomeApi, NewsApi, NlpApi};
pub use classify::classify;
pub use client::{ApiClient, ApiClientBuilder};
pub use config::{
    ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, JSON_CONTENT_TYPE,
    LEGACY_BASE_URL_ENV,
};
pub use envelope::{normalize, ResponseEnvelope, DEFAULT_FAILURE_MESSAGE};
pub use error::{ConfigError, ErrorCause, ErrorKind, NormalizedError};
pub use notify::{
    ChannelNotifier, LogNotifier, Notification, Notifier, Severity, ERROR_DISPLAY_DURATION,
};
pub use outbound::{OutboundError, OutboundStage, PathGuard};
pub use transport::{ReqwestTransport, Transport};
pub use types::{
    params, HttpMethod, Params, PreparedRequest, QueryValue, RawResponse, RequestDescriptor,
    TransportFailure,
};
