// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram Bot API transport for tgmark.
//!
//! This crate implements [`MessageTransport`] on top of the Bot API
//! `sendMessage` method, delivering MarkdownV2 text built with
//! `tgmark-markdown`.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use tgmark_config::TelegramConfig;
use tgmark_core::{DeliveryReceipt, MessageId, MessageTransport, OutboundMessage, TgmarkError};
use tracing::info;

use crate::client::TelegramClient;

/// Delivers messages to Telegram through the Bot API.
pub struct TelegramTransport {
    client: TelegramClient,
}

impl TelegramTransport {
    /// Creates a transport from the `[telegram]` configuration section.
    ///
    /// Fails with [`TgmarkError::Config`] when no bot token is configured.
    pub fn new(config: &TelegramConfig) -> Result<Self, TgmarkError> {
        let token = config
            .bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TgmarkError::Config(
                    "telegram.bot_token is required (set it in tgmark.toml or TGMARK_TELEGRAM_BOT_TOKEN)"
                        .into(),
                )
            })?;

        let client = TelegramClient::new(token, Duration::from_secs(config.timeout_secs))?
            .with_base_url(&config.api_base_url)
            .with_max_retries(config.max_retries);

        info!(
            api_base_url = config.api_base_url,
            max_retries = config.max_retries,
            "Telegram transport initialized"
        );

        Ok(Self { client })
    }

    /// Creates a transport around an already configured client.
    pub fn with_client(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageTransport for TelegramTransport {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, msg: &OutboundMessage) -> Result<DeliveryReceipt, TgmarkError> {
        let message = self.client.send_message(msg).await?;

        Ok(DeliveryReceipt {
            message_id: MessageId(message.message_id),
            entity_types: message
                .entities
                .into_iter()
                .map(|e| e.entity_type)
                .collect(),
        })
    }
}
