// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bot API request and response types for `sendMessage`.

use serde::{Deserialize, Serialize};
use tgmark_core::{OutboundMessage, ParseMode};

/// JSON body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: ParseMode,
    pub disable_notification: bool,
}

impl<'a> From<&'a OutboundMessage> for SendMessageRequest<'a> {
    fn from(msg: &'a OutboundMessage) -> Self {
        Self {
            chat_id: &msg.chat_id,
            text: &msg.text,
            parse_mode: msg.parse_mode,
            disable_notification: msg.disable_notification,
        }
    }
}

/// Envelope around every Bot API response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    pub result: Option<T>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

/// Extra details attached to some failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseParameters {
    /// Seconds to wait before retrying after a 429.
    #[serde(default)]
    pub retry_after: Option<u64>,
}

/// A delivered message as echoed back by Telegram.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    pub date: i64,
    #[serde(default)]
    pub text: Option<String>,
    /// Entities Telegram parsed out of the MarkdownV2 text.
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A styled span Telegram recognised in a message (`bold`, `hashtag`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEntity {
    /// Offset in UTF-16 code units.
    pub offset: usize,
    /// Length in UTF-16 code units.
    pub length: usize,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
