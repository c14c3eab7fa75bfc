//! Command-line arguments for the `dashboard` binary.

use clap::{Args, Parser, Subcommand};
use dashboard_client::{Params, QueryValue};

/// Trade-tension dashboard client
///
/// Calls the analysis backend and prints the resolved JSON payload. The base
/// URL defaults to `DASHBOARD_BASE_API` (or `VUE_APP_BASE_API`) and then to
/// http://localhost:8000/api.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Trade-tension dashboard client")]
pub struct Cli {
    /// Backend base URL, overriding the environment.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Also write logs to ./dashboard.log.
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the client state to stderr after the call settles.
    #[arg(long, global = true)]
    pub print_state: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Trade tension distribution (cached in the store).
    Tension,
    /// Trade tension detail list.
    TensionList(ParamArgs),
    /// Trade tension trend.
    Trend,
    /// Fetch one page of trade news.
    News(ParamArgs),
    /// Run a full news collection.
    FetchAll(ParamArgs),
    /// Past news queries.
    History,
    /// Stored article list.
    Articles(ParamArgs),
    /// One stored article.
    Article { uuid: String },
    /// Analyze the article behind a URL.
    AnalyzeUrl { url: String },
    /// Analyze raw text.
    AnalyzeText { text: String },
    /// Countries known to the backend.
    Countries,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Tension => "tension",
            Command::TensionList(_) => "tension-list",
            Command::Trend => "trend",
            Command::News(_) => "news",
            Command::FetchAll(_) => "fetch-all",
            Command::History => "history",
            Command::Articles(_) => "articles",
            Command::Article { .. } => "article",
            Command::AnalyzeUrl { .. } => "analyze-url",
            Command::AnalyzeText { .. } => "analyze-text",
            Command::Countries => "countries",
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Query parameter as key=value; repeatable.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

impl ParamArgs {
    /// `None` when no parameter was given, so the query string stays empty.
    pub fn to_params(&self) -> Option<Params> {
        if self.params.is_empty() {
            return None;
        }
        Some(
            self.params
                .iter()
                .map(|(key, value)| (key.clone(), QueryValue::from(value.as_str())))
                .collect(),
        )
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_params() {
        let cli = Cli::try_parse_from([
            "dashboard",
            "news",
            "--param",
            "keyword=tariff",
            "--param",
            "page=2",
        ])
        .unwrap();

        let Command::News(args) = cli.command else {
            panic!("expected news command");
        };
        let params = args.to_params().unwrap();
        assert_eq!(params.get("keyword"), Some(&QueryValue::from("tariff")));
        assert_eq!(params.get("page"), Some(&QueryValue::from("2")));
    }

    #[test]
    fn rejects_param_without_equals() {
        assert!(Cli::try_parse_from(["dashboard", "news", "--param", "keyword"]).is_err());
    }

    #[test]
    fn no_params_means_no_query() {
        assert_eq!(ParamArgs::default().to_params(), None);
    }
}
