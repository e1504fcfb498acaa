// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for tgmark.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use serde::{Deserialize, Serialize};
use tgmark_markdown::{Alignment, Column, Table, TableOptions};

/// Top-level tgmark configuration.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TgmarkConfig {
    /// Bot API delivery settings.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Defaults for rendered tables.
    #[serde(default)]
    pub table: TableConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Telegram Bot API delivery configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Bot API token. `None` disables sending.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Default chat to deliver messages to.
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Send messages silently.
    #[serde(default = "default_disable_notification")]
    pub disable_notification: bool,

    /// Bot API base URL, without the `/bot<token>` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries after a transient HTTP failure (429 and 5xx).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            disable_notification: default_disable_notification(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_disable_notification() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

/// Defaults applied to tables built without explicit column settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Placed between cells when rendering.
    #[serde(default)]
    pub separator: String,

    /// Render tables as one fenced code block.
    #[serde(default)]
    pub code_block: bool,

    /// Width of columns without an explicit width.
    #[serde(default = "default_column_width")]
    pub column_width: usize,

    /// Margin of columns without an explicit margin.
    #[serde(default)]
    pub column_margin: usize,

    /// Alignment of columns without an explicit alignment.
    #[serde(default)]
    pub align: Alignment,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            separator: String::new(),
            code_block: false,
            column_width: default_column_width(),
            column_margin: 0,
            align: Alignment::default(),
        }
    }
}

fn default_column_width() -> usize {
    8
}

impl TableConfig {
    /// Render options for a new table.
    pub fn options(&self) -> TableOptions {
        TableOptions {
            separator: self.separator.clone(),
            code_block: self.code_block,
        }
    }

    /// A column using the configured width, margin and alignment.
    pub fn default_column(&self) -> Column {
        Column::new(self.column_width)
            .align(self.align)
            .margin(self.column_margin)
    }

    /// An empty table using the configured render options.
    pub fn new_table(&self) -> Table {
        Table::with_options(self.options())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
