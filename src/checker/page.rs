use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::Page;
use log::debug;
use tokio::time::{Instant, sleep, timeout};

use crate::checker::errors::{CheckerResult, ScrapeError};

/// The page interactions the scraper needs. Tests drive the scrape with a
/// fake implementation; the live flow injects [`ChromePage`].
#[async_trait]
pub trait ScanPage {
    async fn navigate(&self, url: &str) -> CheckerResult<()>;
    async fn wait_for(&self, selector: &str, wait: Duration) -> CheckerResult<()>;
    async fn fill(&self, selector: &str, value: &str) -> CheckerResult<()>;
    async fn click(&self, selector: &str) -> CheckerResult<()>;
    /// Cell texts of every row matched by `selector`, one inner vec per row.
    async fn cell_rows(&self, selector: &str) -> CheckerResult<Vec<Vec<String>>>;
}

/// [`ScanPage`] over a live chromiumoxide page.
pub struct ChromePage {
    page: Page,
    load_timeout: Duration,
    poll_interval: Duration,
}

impl ChromePage {
    pub fn new(page: Page, load_timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            page,
            load_timeout,
            poll_interval,
        }
    }

    async fn evaluate_value<T: serde::de::DeserializeOwned>(
        &self,
        script: String,
    ) -> CheckerResult<T> {
        let value = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| ScrapeError::Evaluation(e.to_string()))?
            .into_value::<T>()
            .map_err(|e| ScrapeError::Evaluation(e.to_string()))?;
        Ok(value)
    }
}

// JS string literal for arbitrary text, so selectors and multi-line payloads
// survive embedding into an evaluated script.
fn js_string(text: &str) -> CheckerResult<String> {
    serde_json::to_string(text).map_err(|e| ScrapeError::Evaluation(e.to_string()).into())
}

#[async_trait]
impl ScanPage for ChromePage {
    async fn navigate(&self, url: &str) -> CheckerResult<()> {
        debug!("Navigating to {}", url);

        let load = async {
            self.page
                .goto(url)
                .await
                .map_err(|e| ScrapeError::Navigation(format!("{}: {}", url, e)))?;
            self.page
                .wait_for_navigation()
                .await
                .map_err(|e| ScrapeError::Navigation(format!("{}: {}", url, e)))?;
            Ok::<(), crate::checker::errors::CheckerError>(())
        };

        match timeout(self.load_timeout, load).await {
            Ok(result) => result,
            Err(_) => Err(ScrapeError::Navigation(format!(
                "page load timed out after {}s: {}",
                self.load_timeout.as_secs(),
                url
            ))
            .into()),
        }
    }

    async fn wait_for(&self, selector: &str, wait: Duration) -> CheckerResult<()> {
        let deadline = Instant::now() + wait;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(ScrapeError::WaitTimeout {
                    selector: selector.to_string(),
                    waited_secs: wait.as_secs(),
                }
                .into());
            }
            sleep(self.poll_interval).await;
        }
    }

    async fn fill(&self, selector: &str, value: &str) -> CheckerResult<()> {
        // Set the value in-page and fire the input events the page listens
        // for, instead of typing the batch key by key.
        let script = format!(
            r#"(() => {{
                const el = document.querySelector({selector});
                if (!el) return false;
                el.value = '';
                el.value = {value};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
                return true;
            }})()"#,
            selector = js_string(selector)?,
            value = js_string(value)?,
        );

        let found: bool = self.evaluate_value(script).await?;
        if !found {
            return Err(ScrapeError::ElementNotFound(selector.to_string()).into());
        }
        Ok(())
    }

    async fn click(&self, selector: &str) -> CheckerResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| ScrapeError::ElementNotFound(selector.to_string()))?;
        element
            .click()
            .await
            .map_err(|e| ScrapeError::Evaluation(format!("click {}: {}", selector, e)))?;
        Ok(())
    }

    async fn cell_rows(&self, selector: &str) -> CheckerResult<Vec<Vec<String>>> {
        let script = format!(
            r#"(() => {{
                const rows = Array.from(document.querySelectorAll({selector}));
                return rows.map(row =>
                    Array.from(row.querySelectorAll('td')).map(td => td.innerText)
                );
            }})()"#,
            selector = js_string(selector)?,
        );

        let rows: Vec<Vec<String>> = self.evaluate_value(script).await?;
        debug!("Extracted {} row(s) for {}", rows.len(), selector);
        Ok(rows)
    }
}
