use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info};

use crate::checker::config::ScannerConfig;
use crate::checker::errors::CheckerResult;
use crate::checker::page::ScanPage;

// Fixed identifiers on the lookup page. This is versionless third-party
// markup; a page redesign breaks all three.
pub const DOMAIN_INPUT_SELECTOR: &str = "textarea#domainsInput";
pub const SCAN_BUTTON_SELECTOR: &str = "button#scanBtn";
pub const RESULT_ROW_SELECTOR: &str = "div.table-card table tbody tr";
const BODY_SELECTOR: &str = "body";

/// Submit the domain batch through the lookup form and read the result table
/// back as a lower-cased-domain -> raw-status map. Rows with fewer than two
/// cells are skipped. Any failure propagates to the caller, which owns
/// recovery and reporting; nothing is retried here.
pub async fn collect_statuses<P: ScanPage + ?Sized>(
    page: &P,
    config: &ScannerConfig,
    domains: &[String],
) -> CheckerResult<HashMap<String, String>> {
    info!(
        "Scanning {} domain(s) via {}",
        domains.len(),
        config.target_url
    );

    page.navigate(&config.target_url).await?;
    page.wait_for(
        BODY_SELECTOR,
        Duration::from_secs(config.body_wait_timeout_secs),
    )
    .await?;

    page.fill(DOMAIN_INPUT_SELECTOR, &domains.join("\n")).await?;
    page.click(SCAN_BUTTON_SELECTOR).await?;

    page.wait_for(
        RESULT_ROW_SELECTOR,
        Duration::from_secs(config.table_wait_timeout_secs),
    )
    .await?;

    let rows = page.cell_rows(RESULT_ROW_SELECTOR).await?;

    let mut results = HashMap::new();
    for cells in rows {
        if cells.len() < 2 {
            debug!("Skipping result row with {} cell(s)", cells.len());
            continue;
        }
        let domain = cells[0].trim().to_lowercase();
        let status = cells[1].trim().to_string();
        results.insert(domain, status);
    }

    info!("Scan returned {} result(s)", results.len());
    Ok(results)
}
