use blockcheck::checker::config::{AppConfig, ScannerConfig};
use blockcheck::checker::notifier::TelegramNotifier;
use blockcheck::checker::runner;
use log::{error, info};

#[tokio::main]
async fn main() {
    let scanner = ScannerConfig::load_or_default();
    scanner.init_logging();

    if let Err(msg) = scanner.validate() {
        error!("Invalid scanner configuration: {}", msg);
        return;
    }

    let app = AppConfig::from_env();
    let notifier = TelegramNotifier::new(&app.telegram_token, &app.telegram_chat_id);

    info!("=== DOMAIN CHECKER ({}) ===", scanner.target_host());

    if let Err(e) = runner::run_check(&scanner, &app, &notifier).await {
        error!("Check run failed: {}", e);
    }
}
