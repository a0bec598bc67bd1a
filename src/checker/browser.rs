use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::checker::config::ScannerConfig;
use crate::checker::errors::{BrowserError, CheckerResult};

/// Owns the headless Chrome process for the duration of one run. Launched
/// once, released exactly once via [`BrowserSession::shutdown`].
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch headless Chrome with the configured window size. Honors an
    /// explicit executable path from the configuration when set.
    pub async fn launch(config: &ScannerConfig) -> CheckerResult<Self> {
        let flags = vec![
            "--headless=new",
            "--no-sandbox",
            "--disable-dev-shm-usage",
            "--disable-gpu",
        ];

        let mut builder = BrowserConfig::builder()
            .window_size(config.window_width, config.window_height)
            .args(flags);

        if let Some(ref exe) = config.chrome_executable {
            debug!("Using Chrome executable at {}", exe);
            builder = builder.chrome_executable(exe);
        }

        let browser_config = builder.build().map_err(BrowserError::ConfigBuild)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        // The CDP event stream must be drained or the connection stalls.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        info!(
            "Launched headless Chrome ({}x{})",
            config.window_width, config.window_height
        );

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a blank page on this session.
    pub async fn new_page(&self) -> CheckerResult<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::PageUnavailable(e.to_string()))?;
        Ok(page)
    }

    /// Best-effort teardown: secondary errors are logged and suppressed so a
    /// failed scrape can still release the browser.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Browser close failed: {}", e);
        }
        if let Err(e) = self.handler_task.await {
            debug!("Browser event handler ended abnormally: {}", e);
        }
        info!("Browser session released");
    }
}
