use std::time::Duration;

use log::{error, info};

use crate::checker::browser::BrowserSession;
use crate::checker::config::{AppConfig, ScannerConfig};
use crate::checker::errors::CheckerResult;
use crate::checker::notifier::Notify;
use crate::checker::page::ChromePage;
use crate::checker::{report, scraper};

/// Cap the batch to the configured per-scan limit, preserving input order.
pub fn cap_domains(mut domains: Vec<String>, limit: usize) -> Vec<String> {
    if domains.len() > limit {
        info!(
            "Got {} domains, only the first {} will be checked",
            domains.len(),
            limit
        );
        domains.truncate(limit);
    }
    domains
}

/// One full check run: load the batch, drive the scan, send exactly one
/// report. No browser is started for an empty batch; once launched, the
/// browser is released before any report goes out, on success or failure.
/// A launch failure propagates to the caller instead of being reported.
pub async fn run_check(
    scanner: &ScannerConfig,
    app: &AppConfig,
    notifier: &dyn Notify,
) -> CheckerResult<()> {
    let host = scanner.target_host();

    let domains = app.domain_list();
    if domains.is_empty() {
        info!("No domains configured, nothing to scan");
        notifier.send(&report::no_domains_report(&host)).await;
        return Ok(());
    }
    info!("Loaded {} domain(s)", domains.len());

    let domains = cap_domains(domains, scanner.max_domains_per_scan);

    let session = BrowserSession::launch(scanner).await?;

    let outcome = match session.new_page().await {
        Ok(raw_page) => {
            let page = ChromePage::new(
                raw_page,
                Duration::from_secs(scanner.page_load_timeout_secs),
                Duration::from_millis(scanner.poll_interval_ms),
            );
            scraper::collect_statuses(&page, scanner, &domains).await
        }
        Err(e) => Err(e),
    };

    // Release before reporting, whatever the scan did.
    session.shutdown().await;

    match outcome {
        Ok(statuses) => {
            notifier
                .send(&report::build_report(&host, &domains, &statuses))
                .await;
        }
        Err(e) => {
            let message = report::scrape_failure_report(&host, &e.to_string());
            error!("{}", message);
            notifier.send(&message).await;
        }
    }

    Ok(())
}
