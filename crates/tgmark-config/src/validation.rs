// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as URL schemes, value ranges, and non-empty credentials.

use crate::diagnostic::ConfigError;
use crate::model::TgmarkConfig;

/// Accepted values for `log.level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const MAX_RETRIES: u32 = 5;

const MAX_COLUMN_WIDTH: usize = 256;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TgmarkConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let telegram = &config.telegram;

    if let Some(token) = &telegram.bot_token {
        if token.trim().is_empty() {
            errors.push(validation("telegram.bot_token must not be empty when set"));
        }
    }

    if let Some(chat_id) = &telegram.chat_id {
        if chat_id.trim().is_empty() {
            errors.push(validation("telegram.chat_id must not be empty when set"));
        }
    }

    let url = telegram.api_base_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(validation(format!(
            "telegram.api_base_url `{url}` must start with http:// or https://"
        )));
    }

    if telegram.timeout_secs < 1 {
        errors.push(validation("telegram.timeout_secs must be at least 1"));
    }

    if telegram.max_retries > MAX_RETRIES {
        errors.push(validation(format!(
            "telegram.max_retries must be at most {MAX_RETRIES}, got {}",
            telegram.max_retries
        )));
    }

    if config.table.column_width > MAX_COLUMN_WIDTH {
        errors.push(validation(format!(
            "table.column_width must be at most {MAX_COLUMN_WIDTH}, got {}",
            config.table.column_width
        )));
    }

    let level = config.log.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(validation(format!(
            "log.level `{}` is not one of {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}
