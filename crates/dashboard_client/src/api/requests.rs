//! Request descriptors for every backend endpoint the dashboard consumes.
use serde_json::Value;

use crate::{Params, RequestDescriptor};

pub fn trade_tension() -> RequestDescriptor {
    RequestDescriptor::get("/tension/distribution")
}

pub fn trade_tension_list(params: Option<Params>) -> RequestDescriptor {
    RequestDescriptor::get("/tension/details").with_params(params)
}

pub fn trade_tension_trend() -> RequestDescriptor {
    RequestDescriptor::get("/tension/trend")
}

pub fn fetch_news(params: Option<Params>) -> RequestDescriptor {
    RequestDescriptor::get("/news/trade").with_params(params)
}

/// Full collection run. The backend takes its options as query parameters
/// even though this is a POST.
pub fn fetch_all_news(params: Option<Params>) -> RequestDescriptor {
    RequestDescriptor::post("/news/fetch-all").with_params(params)
}

pub fn query_history() -> RequestDescriptor {
    RequestDescriptor::get("/news/query-history")
}

pub fn articles_list(params: Option<Params>) -> RequestDescriptor {
    RequestDescriptor::get("/articles/list").with_params(params)
}

/// The uuid is percent-encoded so it always stays a single path segment.
pub fn article_detail(uuid: &str) -> RequestDescriptor {
    RequestDescriptor::get(format!("/articles/{}", urlencoding::encode(uuid)))
}

/// URL-bearing and text-bearing payloads share one endpoint; the backend
/// tells them apart by body shape.
pub fn analyze(body: Value) -> RequestDescriptor {
    RequestDescriptor::post("/nlp/analyze").with_data(body)
}

pub fn country_list() -> RequestDescriptor {
    RequestDescriptor::get("/common/countries")
}
