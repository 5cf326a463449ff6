use async_trait::async_trait;
use serde_json::json;

use crate::config::AlertingConfig;

/// Out-of-band operational alert channel.
///
/// Delivery is best-effort: a failed alert is logged and dropped, never
/// surfaced to the request that triggered it.
#[async_trait]
pub trait AlertNotifier: Send + Sync + 'static {
    async fn notify(&self, message: &str);
}

/// Sends alerts to a Telegram chat via the Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    send_message_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &AlertingConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            send_message_url: format!(
                "https://api.telegram.org/bot{}/sendMessage",
                config.telegram_bot_token
            ),
            chat_id: config.telegram_chat_id.clone(),
        }
    }
}

#[async_trait]
impl AlertNotifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        let result = self
            .client
            .post(&self.send_message_url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": message,
            }))
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to deliver Telegram alert");
        }
    }
}
