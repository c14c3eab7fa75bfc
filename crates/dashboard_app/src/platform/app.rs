use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use anyhow::Context;
use dashboard_client::{ApiClient, ChannelNotifier, ClientConfig, NormalizedError, Notification};
use dashboard_core::Store;
use dashboard_logging::{dash_debug, dash_info};
use log::LevelFilter;
use serde_json::{json, Value};

use super::commit::commit_result;
use super::logging::{self, LogDestination};
use crate::cli::{Cli, Command};

pub async fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::initialize(destination, level);

    let config = build_config(&cli)?;
    dash_info!("using backend {}", config.base_url());

    let (notify_tx, notify_rx) = mpsc::channel();
    let client = ApiClient::builder(config)
        .notifier(Arc::new(ChannelNotifier::new(notify_tx)))
        .build()
        .context("failed to build api client")?;
    let mut store = Store::new();

    let settled = settle(&client, &mut store, &cli.command, &notify_rx).await;
    for notification in &settled.notifications {
        eprintln!("[{:?}] {}", notification.severity, notification.message);
    }

    let code = match &settled.result {
        Ok(payload) => {
            println!("{}", serde_json::to_string_pretty(payload)?);
            ExitCode::SUCCESS
        }
        Err(err) => {
            dash_debug!("{} failed: {:?}", cli.command.name(), err.cause);
            ExitCode::FAILURE
        }
    };

    if cli.print_state {
        eprintln!("{}", serde_json::to_string_pretty(store.state())?);
    }
    Ok(code)
}

/// Outcome of one command once the call has settled.
pub struct Settled {
    pub result: Result<Value, NormalizedError>,
    pub notifications: Vec<Notification>,
}

impl Settled {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs one command with the loading flag held for the duration of the call,
/// commits a successful payload to the store and drains pending notifications.
pub async fn settle(
    client: &ApiClient,
    store: &mut Store,
    command: &Command,
    notifications: &mpsc::Receiver<Notification>,
) -> Settled {
    store.set_loading(true);
    let result = execute(client, command).await;
    store.set_loading(false);

    if let Ok(payload) = &result {
        commit_result(store, command, payload);
    }
    Settled {
        result,
        notifications: notifications.try_iter().collect(),
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout(Duration::from_millis(timeout_ms))?;
    }
    Ok(config)
}

async fn execute(client: &ApiClient, command: &Command) -> Result<Value, NormalizedError> {
    match command {
        Command::Tension => client.home().trade_tension().await,
        Command::TensionList(args) => client.home().trade_tension_list(args.to_params()).await,
        Command::Trend => client.home().trade_tension_trend().await,
        Command::News(args) => client.crawler().crawl_news(args.to_params()).await,
        Command::FetchAll(args) => client.news().fetch_all_news(args.to_params()).await,
        Command::History => client.crawler().crawl_history().await,
        Command::Articles(args) => client.news().articles_list(args.to_params()).await,
        Command::Article { uuid } => client.news().article_detail(uuid).await,
        Command::AnalyzeUrl { url } => client.nlp().analyze_by_url(json!({ "url": url })).await,
        Command::AnalyzeText { text } => {
            client.nlp().analyze_by_text(json!({ "text": text })).await
        }
        Command::Countries => client.common().country_list().await,
    }
}

#[cfg(test)]
mod tests {
    use dashboard_client::{ErrorKind, Severity, ERROR_DISPLAY_DURATION};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::cli::ParamArgs;

    fn wire(server: &MockServer) -> (ApiClient, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel();
        let config = ClientConfig::default()
            .with_base_url(format!("{}/api", server.uri()))
            .unwrap();
        let client = ApiClient::builder(config)
            .notifier(Arc::new(ChannelNotifier::new(tx)))
            .build()
            .unwrap();
        (client, rx)
    }

    #[tokio::test]
    async fn successful_news_call_commits_history() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/news/trade"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "data": [{ "title": "a" }] })),
            )
            .mount(&server)
            .await;
        let (client, rx) = wire(&server);
        let mut store = Store::with_clock(Arc::new(|| 42));
        let command = Command::News(ParamArgs {
            params: vec![("keyword".to_string(), "tariff".to_string())],
        });

        let settled = settle(&client, &mut store, &command, &rx).await;

        assert!(settled.succeeded());
        assert!(settled.notifications.is_empty());
        assert!(!store.is_loading());
        assert!(store.consume_dirty());
        assert_eq!(
            store.crawler_history(),
            vec![json!({
                "action": "news",
                "params": { "keyword": "tariff" },
                "count": 1,
                "timestamp": 42,
            })]
        );
    }

    #[tokio::test]
    async fn server_error_drains_notification_and_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tension/distribution"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let (client, rx) = wire(&server);
        let mut store = Store::new();

        let settled = settle(&client, &mut store, &Command::Tension, &rx).await;

        assert!(!settled.succeeded());
        let err = settled.result.as_ref().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ServerError);
        assert_eq!(settled.notifications.len(), 1);
        assert_eq!(settled.notifications[0].severity, Severity::Error);
        assert_eq!(settled.notifications[0].duration, ERROR_DISPLAY_DURATION);
        assert!(!store.is_loading());
        assert!(store.cached_tension_data().is_none());
    }
}
