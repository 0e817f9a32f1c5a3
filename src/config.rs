// Runtime configuration for the dashboard (not operator-specific)
use clap::Parser;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

pub const APP_TITLE: &str = "ICEDTEA CTF bot";
pub const APP_SUBTITLE: &str = "CTF Operations Dashboard";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/ICEDTEACTF/CTFeed";

/// Command line arguments, each one falling back to an environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "ctfdash", version, about = "Terminal dashboard for the ICEDTEA CTF event bot")]
pub struct Args {
    /// Base URL of the bot's REST API
    #[arg(long, env = "CTFDASH_API_BASE_URL", default_value = "")]
    pub api_base_url: String,

    /// Project page shown in the footer
    #[arg(long, env = "CTFDASH_GITHUB_URL", default_value = DEFAULT_GITHUB_URL)]
    pub github_url: String,

    /// Session cookie value obtained after signing in through Discord
    #[arg(long, env = "CTFDASH_SESSION")]
    pub session_cookie: Option<String>,

    #[arg(long, env = "CTFDASH_SESSION_COOKIE_NAME", default_value = "session")]
    pub session_cookie_name: String,

    /// Send numeric-looking config drafts as JSON numbers instead of strings
    #[arg(long, env = "CTFDASH_COERCE_NUMERIC_CONFIG", default_value_t = true, action = clap::ArgAction::Set)]
    pub coerce_numeric_config: bool,

    #[arg(long, env = "CTFDASH_LOG_FILE", default_value = "ctfdash.log")]
    pub log_file: PathBuf,

    /// tracing filter directive, e.g. `info` or `ctfdash=debug`
    #[arg(long, env = "CTFDASH_LOG", default_value = "info")]
    pub log_level: String,
}

/// Configuration constants for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub github_url: String,
    pub session_cookie: Option<String>,
    pub session_cookie_name: String,
    pub coerce_numeric_config: bool,
    pub log_file: PathBuf,
    pub log_level: String,
    pub tick_rate_ms: u64,
    /// Rows from the bottom of the event list at which the next page is requested.
    pub load_more_threshold: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            github_url: DEFAULT_GITHUB_URL.to_string(),
            session_cookie: None,
            session_cookie_name: "session".to_string(),
            coerce_numeric_config: true,
            log_file: PathBuf::from("ctfdash.log"),
            log_level: "info".to_string(),
            tick_rate_ms: 50,
            load_more_threshold: 3,
        }
    }
}

impl AppConfig {
    pub fn from_args(args: Args) -> AppResult<Self> {
        let api_base_url = args.api_base_url.trim().trim_end_matches('/').to_string();
        if !api_base_url.is_empty()
            && !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://"))
        {
            return Err(AppError::Config {
                message: format!("api base url must start with http:// or https://, got '{}'", api_base_url),
            });
        }

        let github_url = if args.github_url.trim().is_empty() {
            DEFAULT_GITHUB_URL.to_string()
        } else {
            args.github_url.trim().to_string()
        };

        let session_cookie = args
            .session_cookie
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            api_base_url,
            github_url,
            session_cookie,
            session_cookie_name: args.session_cookie_name,
            coerce_numeric_config: args.coerce_numeric_config,
            log_file: args.log_file,
            log_level: args.log_level,
            ..Self::default()
        })
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
