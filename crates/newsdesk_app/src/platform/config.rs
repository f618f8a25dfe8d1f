//! Command-line and environment configuration.
//!
//! The API key is only ever read from the command line or the environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use newsdesk_core::{Category, Msg};
use newsdesk_engine::{ApiSettings, DEFAULT_BASE_URL, DEFAULT_COUNTRY, DEFAULT_LANG};

use super::ui::constants::DEFAULT_ROWS;

/// Browse and search news headlines from the terminal.
#[derive(Parser, Debug)]
#[command(name = "newsdesk", version, about)]
pub struct Cli {
    /// News API key
    #[arg(long, env = "NEWSDESK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the news API
    #[arg(long, env = "NEWSDESK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Article language
    #[arg(long, env = "NEWSDESK_LANG", default_value = DEFAULT_LANG)]
    pub lang: String,

    /// Country for top headlines
    #[arg(long, env = "NEWSDESK_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// Connect timeout in seconds (HTTP client default when omitted)
    #[arg(long, value_name = "SECS")]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds (HTTP client default when omitted)
    #[arg(long, value_name = "SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Card lines visible at once
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Start on this category instead of general
    #[arg(long)]
    pub category: Option<Category>,

    /// Start with this search
    #[arg(long)]
    pub search: Option<String>,

    /// Log file path
    #[arg(long, default_value = "./newsdesk.log")]
    pub log_file: PathBuf,

    /// Log to stderr instead of a file
    #[arg(long)]
    pub log_stderr: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "NEWSDESK_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn api_settings(&self) -> ApiSettings {
        let mut settings = ApiSettings::with_api_key(self.api_key.clone());
        settings.base_url = self.base_url.clone();
        settings.lang = self.lang.clone();
        settings.country = self.country.clone();
        settings.connect_timeout = self.connect_timeout_secs.map(Duration::from_secs);
        settings.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        settings
    }

    pub fn log_level(&self) -> LevelFilter {
        engine_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Messages that set up the first query. Only the last one's fetch survives.
    pub fn startup_messages(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(category) = self.category {
            msgs.push(Msg::CategorySelected(category));
        }
        if let Some(search) = self.search.as_ref().filter(|s| !s.trim().is_empty()) {
            msgs.push(Msg::SearchChanged(search.trim().to_string()));
        }
        if msgs.is_empty() {
            msgs.push(Msg::SessionStarted);
        }
        msgs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["newsdesk", "--api-key", "k"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn defaults_map_to_api_settings() {
        let cli = parse(&[]);
        let settings = cli.api_settings();
        assert_eq!(settings.api_key, "k");
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.lang, "en");
        assert_eq!(settings.country, "us");
        assert_eq!(settings.request_timeout, None);
        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.log_level(), LevelFilter::Info);
        assert_eq!(cli.startup_messages(), vec![Msg::SessionStarted]);
    }

    #[test]
    fn overrides_are_applied() {
        let cli = parse(&[
            "--lang",
            "fr",
            "--country",
            "fr",
            "--request-timeout-secs",
            "5",
            "--log-level",
            "nonsense",
        ]);
        let settings = cli.api_settings();
        assert_eq!(settings.lang, "fr");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn startup_query_from_flags() {
        let cli = parse(&["--category", "science", "--search", " comets "]);
        assert_eq!(
            cli.startup_messages(),
            vec![
                Msg::CategorySelected(Category::Science),
                Msg::SearchChanged("comets".to_string()),
            ]
        );

        assert!(Cli::try_parse_from(["newsdesk", "--api-key", "k", "--category", "gossip"]).is_err());
    }
}
