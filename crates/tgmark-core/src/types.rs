// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message types exchanged between the text builders and a transport.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tgmark_markdown::StyledText;

/// Identifier Telegram assigns to a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub i64);

/// Telegram `parse_mode` values.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ParseMode {
    #[default]
    MarkdownV2,
    Markdown,
    #[strum(serialize = "HTML")]
    #[serde(rename = "HTML")]
    Html,
}

/// A finished message body and the protocol parameters it is sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: String,
    /// Opaque body. For [`ParseMode::MarkdownV2`] it must already be escaped.
    pub text: String,
    pub parse_mode: ParseMode,
    pub disable_notification: bool,
}

impl OutboundMessage {
    /// A silent MarkdownV2 message carrying `body`.
    pub fn markdown_v2(chat_id: impl Into<String>, body: StyledText) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: body.into_string(),
            parse_mode: ParseMode::MarkdownV2,
            disable_notification: true,
        }
    }

    pub fn with_notification(mut self, notify: bool) -> Self {
        self.disable_notification = !notify;
        self
    }

    /// Characters left after Telegram parses the entities, which is what its
    /// size limit applies to. Only MarkdownV2 markup is stripped; other parse
    /// modes are counted as sent.
    pub fn visible_len(&self) -> usize {
        match self.parse_mode {
            ParseMode::MarkdownV2 => tgmark_markdown::visible_len(&self.text),
            ParseMode::Markdown | ParseMode::Html => self.text.chars().count(),
        }
    }
}

/// What a transport reports back after a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub message_id: MessageId,
    /// Entity types Telegram recognised in the text, in order
    /// (`bold`, `hashtag`, `text_link`, ...).
    pub entity_types: Vec<String>,
}
