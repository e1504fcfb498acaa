// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for tgmark message delivery and configuration.
//!
//! Building MarkdownV2 text never fails; these errors come from the layers
//! that load settings and hand the finished text to Telegram.

use thiserror::Error;

/// The primary error type used across tgmark's outer crates.
#[derive(Debug, Error)]
pub enum TgmarkError {
    /// Configuration errors (missing bot token, malformed values).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP-level failures talking to the Bot API.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The Bot API answered with `ok: false`.
    #[error("telegram API error {code}: {description}")]
    Api { code: i64, description: String },

    /// The message exceeds the platform limit and was not sent.
    #[error("message is {length} characters long, the limit is {max}")]
    MessageTooLong { length: usize, max: usize },

    /// Caller-supplied input could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TgmarkError {
    /// Builds a [`TgmarkError::Transport`] from an underlying error.
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TgmarkError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
