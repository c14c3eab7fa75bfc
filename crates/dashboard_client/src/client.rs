use std::sync::Arc;

use dashboard_logging::{dash_debug, dash_error};
use serde_json::Value;

use crate::api::{CommonApi, CrawlerApi, HomeApi, NewsApi, NlpApi};
use crate::{
    classify, envelope, ClientConfig, ConfigError, LogNotifier, NormalizedError, Notification,
    Notifier, OutboundStage, PathGuard, PreparedRequest, RequestDescriptor, ReqwestTransport,
    Transport, TransportFailure,
};

struct Inner {
    config: ClientConfig,
    stages: Vec<Arc<dyn OutboundStage>>,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

/// Single entry point for every backend call.
///
/// A call runs through the outbound stages, the transport, and then either
/// the envelope normalizer (2xx) or the error classifier. Every failure is
/// logged, notified once, and returned as a [`NormalizedError`].
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    /// Client with the reqwest transport, the path guard and log notifications.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            stages: vec![Arc::new(PathGuard)],
            transport: None,
            notifier: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Value, NormalizedError> {
        let prepared = match self.prepare(descriptor) {
            Ok(prepared) => prepared,
            Err(failure) => {
                dash_error!("request error: {failure}");
                return Err(self.reject(failure));
            }
        };

        dash_debug!("{} {}", prepared.method, prepared.url);
        match self.inner.transport.execute(prepared).await {
            Ok(response) if response.is_success() => {
                envelope::normalize(response.json_body()).map_err(|err| {
                    dash_error!("backend reported failure: {}", err.message);
                    self.surface(err)
                })
            }
            Ok(response) => {
                let body = String::from_utf8_lossy(&response.body).into_owned();
                Err(self.reject(TransportFailure::http_status(response.status, body)))
            }
            Err(failure) => Err(self.reject(failure)),
        }
    }

    pub fn home(&self) -> HomeApi<'_> {
        HomeApi::new(self)
    }

    pub fn news(&self) -> NewsApi<'_> {
        NewsApi::new(self)
    }

    pub fn crawler(&self) -> CrawlerApi<'_> {
        CrawlerApi::new(self)
    }

    pub fn nlp(&self) -> NlpApi<'_> {
        NlpApi::new(self)
    }

    pub fn common(&self) -> CommonApi<'_> {
        CommonApi::new(self)
    }

    fn prepare(&self, descriptor: RequestDescriptor) -> Result<PreparedRequest, TransportFailure> {
        let mut descriptor = descriptor;
        for stage in &self.inner.stages {
            descriptor = stage
                .process(descriptor)
                .map_err(|err| TransportFailure::message(err.to_string()))?;
        }

        let config = &self.inner.config;
        let mut url = config
            .resolve(&descriptor.url)
            .map_err(|err| TransportFailure::message(format!("invalid request url: {err}")))?;
        if let Some(params) = descriptor.params.as_ref().filter(|params| !params.is_empty()) {
            let mut query = url.query_pairs_mut();
            for (name, value) in params {
                query.append_pair(name, &value.to_string());
            }
        }

        let body = descriptor
            .data
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| TransportFailure::message(format!("invalid request body: {err}")))?;

        Ok(PreparedRequest {
            method: descriptor.method,
            url,
            headers: vec![(
                "Content-Type".to_string(),
                config.content_type().to_string(),
            )],
            body,
            timeout: config.timeout(),
        })
    }

    fn reject(&self, failure: TransportFailure) -> NormalizedError {
        dash_error!("response error: {failure}");
        self.surface(classify(&failure))
    }

    fn surface(&self, err: NormalizedError) -> NormalizedError {
        self.inner
            .notifier
            .notify(Notification::error(err.message.clone()));
        err
    }
}

pub struct ApiClientBuilder {
    config: ClientConfig,
    stages: Vec<Arc<dyn OutboundStage>>,
    transport: Option<Arc<dyn Transport>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiClientBuilder {
    /// Appends an outbound stage after the ones already registered.
    pub fn stage(mut self, stage: Arc<dyn OutboundStage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> Result<ApiClient, ConfigError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.timeout())?),
        };
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));

        Ok(ApiClient {
            inner: Arc::new(Inner {
                config: self.config,
                stages: self.stages,
                transport,
                notifier,
            }),
        })
    }
}
