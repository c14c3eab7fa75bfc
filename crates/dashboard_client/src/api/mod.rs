//! Typed call groups. Each operation builds one descriptor and hands it to the
//! [`ApiClient`]; error handling is entirely the client's.
pub mod requests;

use serde_json::Value;

use crate::{ApiClient, NormalizedError, Params};

type ApiResult = Result<Value, NormalizedError>;

/// Trade tension overview for the home page.
#[derive(Clone, Copy)]
pub struct HomeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HomeApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn trade_tension(&self) -> ApiResult {
        self.client.send(requests::trade_tension()).await
    }

    pub async fn trade_tension_list(&self, params: Option<Params>) -> ApiResult {
        self.client.send(requests::trade_tension_list(params)).await
    }

    pub async fn trade_tension_trend(&self) -> ApiResult {
        self.client.send(requests::trade_tension_trend()).await
    }
}

/// News collection and article retrieval.
#[derive(Clone, Copy)]
pub struct NewsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NewsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn fetch_news(&self, params: Option<Params>) -> ApiResult {
        self.client.send(requests::fetch_news(params)).await
    }

    pub async fn fetch_all_news(&self, params: Option<Params>) -> ApiResult {
        self.client.send(requests::fetch_all_news(params)).await
    }

    pub async fn query_history(&self) -> ApiResult {
        self.client.send(requests::query_history()).await
    }

    pub async fn articles_list(&self, params: Option<Params>) -> ApiResult {
        self.client.send(requests::articles_list(params)).await
    }

    pub async fn article_detail(&self, uuid: &str) -> ApiResult {
        self.client.send(requests::article_detail(uuid)).await
    }
}

/// Older crawler surface, kept for existing callers. Every operation forwards
/// to [`NewsApi`].
#[derive(Clone, Copy)]
pub struct CrawlerApi<'a> {
    news: NewsApi<'a>,
}

impl<'a> CrawlerApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self {
            news: NewsApi::new(client),
        }
    }

    pub async fn crawl_news(&self, params: Option<Params>) -> ApiResult {
        self.news.fetch_news(params).await
    }

    pub async fn crawl_history(&self) -> ApiResult {
        self.news.query_history().await
    }
}

#[derive(Clone, Copy)]
pub struct NlpApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NlpApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn analyze_by_url(&self, body: Value) -> ApiResult {
        self.client.send(requests::analyze(body)).await
    }

    pub async fn analyze_by_text(&self, body: Value) -> ApiResult {
        self.client.send(requests::analyze(body)).await
    }

    /// Stored articles are already analyzed; this reads the article detail.
    pub async fn analyze_by_uuid(&self, uuid: &str) -> ApiResult {
        NewsApi::new(self.client).article_detail(uuid).await
    }
}

#[derive(Clone, Copy)]
pub struct CommonApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CommonApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn country_list(&self) -> ApiResult {
        self.client.send(requests::country_list()).await
    }
}
