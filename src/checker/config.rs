use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

use crate::checker::errors::{CheckerResult, ConfigurationError};

/// Candidate paths probed for an optional scanner configuration file
const CONFIG_CANDIDATES: [&str; 3] = ["blockcheck.yaml", "config/blockcheck.yaml", "config/app.yaml"];

/// Runtime credentials and the domain batch, read from the environment once
/// at process entry and passed down by parameter.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub domains_raw: String,
}

impl AppConfig {
    /// Read `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID` and `DOMAINS_TO_CHECK`.
    /// Missing variables become empty strings; the callers treat emptiness
    /// as "not configured" rather than as an error.
    pub fn from_env() -> Self {
        Self {
            telegram_token: env::var("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            domains_raw: env::var("DOMAINS_TO_CHECK").unwrap_or_default(),
        }
    }

    /// Ordered, trimmed, non-empty domain list parsed from the raw value.
    /// An empty result is a valid terminal state handled by the caller.
    pub fn domain_list(&self) -> Vec<String> {
        parse_domain_list(&self.domains_raw)
    }
}

/// Split a newline- or comma-delimited domain string into an ordered list,
/// trimming whitespace and dropping empty fragments.
pub fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.replace('\n', ",")
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scanner configuration, loadable from an optional YAML file
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScannerConfig {
    /// Lookup page the scan is driven against
    pub target_url: String,
    /// Browser window width in pixels
    pub window_width: u32,
    /// Browser window height in pixels
    pub window_height: u32,
    /// Page load timeout in seconds
    pub page_load_timeout_secs: u64,
    /// Timeout for the page body to exist, in seconds
    pub body_wait_timeout_secs: u64,
    /// Timeout for the first result row to appear, in seconds
    pub table_wait_timeout_secs: u64,
    /// Interval between element polls in milliseconds
    pub poll_interval_ms: u64,
    /// The lookup page rejects larger batches; excess domains are dropped
    pub max_domains_per_scan: usize,
    /// Optional path to a specific Chrome executable
    pub chrome_executable: Option<String>,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for logging behavior
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            target_url: "https://www.ninjamvp.asia/".to_string(),
            window_width: 1280,
            window_height: 720,
            page_load_timeout_secs: 60,
            body_wait_timeout_secs: 30,
            table_wait_timeout_secs: 60,
            poll_interval_ms: 250,
            max_domains_per_scan: 50,
            chrome_executable: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ScannerConfig {
    /// Load configuration from a YAML file
    pub fn load_from_yaml(file_path: &str) -> CheckerResult<Self> {
        let content = std::fs::read_to_string(file_path).map_err(|e| {
            ConfigurationError::FileNotFound(format!("{}: {}", file_path, e))
        })?;
        let config: ScannerConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Probe the candidate paths and load the first parseable file,
    /// falling back to defaults when none exists.
    pub fn load_or_default() -> Self {
        for path in &CONFIG_CANDIDATES {
            if Path::new(path).exists() {
                match Self::load_from_yaml(path) {
                    Ok(config) => {
                        log::info!("Loaded scanner configuration from {}", path);
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Failed to load scanner configuration from {}: {}", path, e);
                    }
                }
            }
        }
        log::info!("Using default scanner configuration");
        Self::default()
    }

    /// Save configuration to a YAML file
    pub fn save_to_yaml(&self, file_path: &str) -> CheckerResult<()> {
        let yaml_content = serde_yaml::to_string(self)?;

        if let Some(parent) = PathBuf::from(file_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigurationError::ParseError(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(file_path, yaml_content).map_err(|e| {
            ConfigurationError::ParseError(format!("cannot write {}: {}", file_path, e)).into()
        })
    }

    /// Host portion of the target URL, used to label reports
    pub fn target_host(&self) -> String {
        Url::parse(&self.target_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| self.target_url.clone())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        match Url::parse(&self.target_url) {
            Ok(url) if url.host_str().is_some() => {}
            _ => return Err(format!("target_url is not a valid URL: {}", self.target_url)),
        }

        if self.window_width == 0 || self.window_height == 0 {
            return Err("Window dimensions must be greater than 0".to_string());
        }

        if self.page_load_timeout_secs == 0
            || self.body_wait_timeout_secs == 0
            || self.table_wait_timeout_secs == 0
        {
            return Err("Timeouts must be greater than 0 seconds".to_string());
        }

        if self.poll_interval_ms == 0 {
            return Err("Poll interval must be greater than 0 milliseconds".to_string());
        }

        if self.max_domains_per_scan == 0 {
            return Err("Max domains per scan must be greater than 0".to_string());
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Must be one of: {:?}",
                self.logging.level, valid_log_levels
            ));
        }

        Ok(())
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self) {
        use log::LevelFilter;

        let log_level = match self.logging.level.as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        };

        // try_init so tests that already installed a logger are not a panic
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .try_init();
    }
}
