// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Telegram Bot API.
//!
//! Provides [`TelegramClient`], which posts `sendMessage` requests and
//! retries transient failures (429 and 5xx).

use std::time::Duration;

use reqwest::StatusCode;
use tgmark_core::{OutboundMessage, TgmarkError};
use tracing::{debug, warn};

use crate::types::{ApiResponse, Message, SendMessageRequest};

/// Bot API base URL.
pub const API_BASE_URL: &str = "https://api.telegram.org";

/// Longest text Telegram accepts in one message, in characters after entity
/// parsing.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Upper bound on how long a `retry_after` hint can delay a retry.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// HTTP client for Bot API calls on behalf of one bot.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
    max_retries: u32,
}

impl TelegramClient {
    /// Creates a client for the bot identified by `token`.
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self, TgmarkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TgmarkError::transport("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: API_BASE_URL.to_string(),
            max_retries: 1,
        })
    }

    /// Points the client at another Bot API server (a local server, or a
    /// mock in tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Sends one message and returns Telegram's echo of it.
    ///
    /// Messages whose visible text is over [`MAX_MESSAGE_LENGTH`] characters
    /// are rejected without a request. Transient statuses are retried up to `max_retries` times.
    pub async fn send_message(&self, msg: &OutboundMessage) -> Result<Message, TgmarkError> {
        let length = msg.visible_len();
        if length > MAX_MESSAGE_LENGTH {
            return Err(TgmarkError::MessageTooLong {
                length,
                max: MAX_MESSAGE_LENGTH,
            });
        }

        let body = SendMessageRequest::from(msg);
        let url = self.method_url("sendMessage");

        let mut attempt = 0;
        loop {
            let response = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| {
                    TgmarkError::transport("sendMessage request failed", e.without_url())
                })?;

            let status = response.status();
            debug!(status = %status, attempt, chat_id = %msg.chat_id, "sendMessage response received");

            let text = response
                .text()
                .await
                .map_err(|e| {
                    TgmarkError::transport("failed to read response body", e.without_url())
                })?;
            let parsed = serde_json::from_str::<ApiResponse<Message>>(&text);

            if is_transient(status) && attempt < self.max_retries {
                let delay = parsed
                    .as_ref()
                    .ok()
                    .and_then(|r| r.parameters.as_ref())
                    .and_then(|p| p.retry_after)
                    .map(Duration::from_secs)
                    .unwrap_or(DEFAULT_RETRY_DELAY)
                    .min(MAX_RETRY_DELAY);
                attempt += 1;
                warn!(status = %status, attempt, ?delay, "transient error, will retry");
                tokio::time::sleep(delay).await;
                continue;
            }

            let parsed = match parsed {
                Ok(parsed) => parsed,
                Err(e) if status.is_success() => {
                    return Err(TgmarkError::transport("failed to parse API response", e));
                }
                Err(_) => {
                    return Err(TgmarkError::Api {
                        code: i64::from(status.as_u16()),
                        description: text,
                    });
                }
            };

            return match (parsed.ok, parsed.result) {
                (true, Some(message)) => Ok(message),
                (true, None) => Err(TgmarkError::Internal(
                    "sendMessage succeeded without a result".into(),
                )),
                (false, _) => Err(TgmarkError::Api {
                    code: parsed
                        .error_code
                        .unwrap_or_else(|| i64::from(status.as_u16())),
                    description: parsed.description.unwrap_or_default(),
                }),
            };
        }
    }
}

/// Returns true for statuses worth retrying.
fn is_transient(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503)
}
