use std::time::Duration;

use async_trait::async_trait;
use log::{error, info, warn};
use serde_json::json;

/// Where terminal reports go. One implementation talks to Telegram; tests
/// substitute a recording fake.
#[async_trait]
pub trait Notify {
    async fn send(&self, text: &str);
}

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const RESPONSE_LOG_LIMIT: usize = 200;

/// Sends plain-text messages to a Telegram chat via the Bot API. Transport
/// failures are logged and swallowed; a lost report never fails the run.
pub struct TelegramNotifier {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    /// Both credentials are required; without them every send is a no-op.
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.chat_id.is_empty()
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.token)
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn send(&self, text: &str) {
        if !self.is_configured() {
            warn!("Telegram credentials not set, skipping notification");
            return;
        }

        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });

        let response = self
            .client
            .post(self.endpoint())
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()
            .await;

        // Response is logged for diagnostics only; the status code never
        // changes the flow of the run.
        match response {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                let preview: String = body.chars().take(RESPONSE_LOG_LIMIT).collect();
                info!("Telegram response: {} {}", status, preview);
            }
            Err(e) => {
                error!("Failed to send Telegram message: {}", e);
            }
        }
    }
}
