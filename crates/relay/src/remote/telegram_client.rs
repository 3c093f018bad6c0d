use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use common::models::{DispatchResult, RenderedMessage};

use crate::traits::Dispatcher;

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
    disable_web_page_preview: bool,
}

/// The interesting part of Telegram's sendMessage answer. `description` is
/// only set on errors.
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

/// Thin client for the Telegram Bot API. The bot token travels with each
/// request, so the client itself holds only the pooled HTTP client and the
/// endpoint base.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client with static options");

        Self { client, base_url }
    }
}

#[async_trait]
impl Dispatcher for TelegramClient {
    async fn dispatch(
        &self,
        bot_token: &str,
        chat_id: &str,
        message: &RenderedMessage,
    ) -> DispatchResult {
        let url = format!("{}/bot{}/sendMessage", self.base_url, bot_token);
        let body = SendMessageBody {
            chat_id,
            text: message.as_str(),
            disable_web_page_preview: true,
        };

        let resp = match self.client.post(&url).json(&body).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                error!("Telegram send timed out: {}", e);
                return DispatchResult::Timeout;
            }
            Err(e) => {
                error!("Telegram send failed in transport: {}", e);
                return DispatchResult::NetworkFailure;
            }
        };

        let status = resp.status();
        let parsed = resp.json::<SendMessageResponse>().await.ok();

        if !status.is_success() {
            let reason = parsed
                .and_then(|r| r.description)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            error!("Telegram API rejected message: {}", reason);
            return DispatchResult::PlatformRejected(reason);
        }

        match parsed {
            Some(SendMessageResponse {
                ok: false,
                description,
            }) => {
                let reason =
                    description.unwrap_or_else(|| "unknown Telegram error".to_string());
                error!("Telegram API rejected message: {}", reason);
                DispatchResult::PlatformRejected(reason)
            }
            _ => {
                info!("Signal sent successfully to {}", chat_id);
                DispatchResult::Delivered
            }
        }
    }
}
