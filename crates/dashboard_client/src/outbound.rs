use thiserror::Error;

use crate::RequestDescriptor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutboundError {
    #[error("request path must be relative and start with '/': '{url}'")]
    InvalidPath { url: String },
    #[error("request path contains a dot segment: '{url}'")]
    DotSegment { url: String },
    #[error("outbound stage '{stage}' rejected request: {message}")]
    Rejected { stage: &'static str, message: String },
}

/// A step run on every descriptor before it is sent. Stages either forward
/// the (possibly amended) descriptor or stop the call.
pub trait OutboundStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, request: RequestDescriptor) -> Result<RequestDescriptor, OutboundError>;
}

/// Default stage: checks the path and otherwise forwards the request untouched.
/// Credentials would be attached by an additional stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathGuard;

impl OutboundStage for PathGuard {
    fn name(&self) -> &'static str {
        "path_guard"
    }

    fn process(&self, request: RequestDescriptor) -> Result<RequestDescriptor, OutboundError> {
        let url = request.url.as_str();
        if !url.starts_with('/') || url.starts_with("//") || url.contains("://") {
            return Err(OutboundError::InvalidPath {
                url: request.url.clone(),
            });
        }
        if has_dot_segment(url) {
            return Err(OutboundError::DotSegment {
                url: request.url.clone(),
            });
        }
        Ok(request)
    }
}

/// True when a segment would be collapsed by URL resolution (`.`, `..` or
/// their percent-encoded forms).
fn has_dot_segment(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.split('/').any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    })
}
