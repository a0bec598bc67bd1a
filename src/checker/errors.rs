use std::fmt;

/// Error types for the block-status checker
#[derive(Debug)]
pub enum CheckerError {
    /// Browser launch/session related errors
    Browser(BrowserError),
    /// Page interaction and scraping related errors
    Scrape(ScrapeError),
    /// Configuration related errors
    Configuration(ConfigurationError),
}

/// Browser session specific errors
#[derive(Debug)]
pub enum BrowserError {
    ConfigBuild(String),
    LaunchFailed(String),
    PageUnavailable(String),
}

/// Page interaction specific errors
#[derive(Debug)]
pub enum ScrapeError {
    Navigation(String),
    ElementNotFound(String),
    WaitTimeout { selector: String, waited_secs: u64 },
    Evaluation(String),
}

/// Configuration specific errors
#[derive(Debug)]
pub enum ConfigurationError {
    FileNotFound(String),
    ParseError(String),
    ValidationFailed(String),
}

// Display implementations carry the text that ends up in failure reports.
impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Browser(e) => write!(f, "Browser error: {}", e),
            CheckerError::Scrape(e) => write!(f, "Scrape error: {}", e),
            CheckerError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::ConfigBuild(msg) => {
                write!(f, "Failed to build browser configuration: {}", msg)
            }
            BrowserError::LaunchFailed(msg) => write!(f, "Failed to launch browser: {}", msg),
            BrowserError::PageUnavailable(msg) => write!(f, "Failed to open page: {}", msg),
        }
    }
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Navigation(msg) => write!(f, "Navigation failed: {}", msg),
            ScrapeError::ElementNotFound(selector) => {
                write!(f, "Element not found: {}", selector)
            }
            ScrapeError::WaitTimeout {
                selector,
                waited_secs,
            } => write!(f, "Timed out after {}s waiting for: {}", waited_secs, selector),
            ScrapeError::Evaluation(msg) => write!(f, "Page script failed: {}", msg),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigurationError::ParseError(msg) => write!(f, "Configuration parse error: {}", msg),
            ConfigurationError::ValidationFailed(msg) => {
                write!(f, "Configuration validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for CheckerError {}
impl std::error::Error for BrowserError {}
impl std::error::Error for ScrapeError {}
impl std::error::Error for ConfigurationError {}

impl From<BrowserError> for CheckerError {
    fn from(err: BrowserError) -> Self {
        CheckerError::Browser(err)
    }
}

impl From<ScrapeError> for CheckerError {
    fn from(err: ScrapeError) -> Self {
        CheckerError::Scrape(err)
    }
}

impl From<ConfigurationError> for CheckerError {
    fn from(err: ConfigurationError) -> Self {
        CheckerError::Configuration(err)
    }
}

impl From<serde_yaml::Error> for CheckerError {
    fn from(err: serde_yaml::Error) -> Self {
        CheckerError::Configuration(ConfigurationError::ParseError(err.to_string()))
    }
}

/// Result type alias for checker operations
pub type CheckerResult<T> = Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CheckerError::Scrape(ScrapeError::WaitTimeout {
            selector: "div.table-card table tbody tr".to_string(),
            waited_secs: 60,
        });
        assert!(error.to_string().contains("Scrape error"));
        assert!(error.to_string().contains("60s"));
        assert!(error.to_string().contains("div.table-card table tbody tr"));
    }

    #[test]
    fn test_browser_error_display() {
        let error = CheckerError::Browser(BrowserError::LaunchFailed("no executable".to_string()));
        assert!(error.to_string().contains("Browser error"));
        assert!(error.to_string().contains("Failed to launch browser"));
    }

    #[test]
    fn test_configuration_error_display() {
        let error = CheckerError::Configuration(ConfigurationError::ValidationFailed(
            "target_url is not a valid URL".to_string(),
        ));
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("target_url"));
    }

    #[test]
    fn test_error_conversions() {
        let scrape: CheckerError = ScrapeError::ElementNotFound("button#scanBtn".to_string()).into();
        match scrape {
            CheckerError::Scrape(ScrapeError::ElementNotFound(sel)) => {
                assert_eq!(sel, "button#scanBtn")
            }
            _ => panic!("Expected ScrapeError"),
        }

        let yaml_err = serde_yaml::from_str::<u32>("not: a number").unwrap_err();
        let converted: CheckerError = yaml_err.into();
        match converted {
            CheckerError::Configuration(ConfigurationError::ParseError(_)) => {}
            _ => panic!("Expected ConfigurationError"),
        }
    }
}
