// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./tgmark.toml` > `~/.config/tgmark/tgmark.toml` > `/etc/tgmark/tgmark.toml`
//! with environment variable overrides via `TGMARK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TgmarkConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG: &str = "tgmark.toml";

/// System-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/tgmark/tgmark.toml";

/// Path of the per-user config file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tgmark/tgmark.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/tgmark/tgmark.toml` (system-wide)
/// 3. `~/.config/tgmark/tgmark.toml` (user XDG config)
/// 4. `./tgmark.toml` (local directory)
/// 5. `TGMARK_*` environment variables
pub fn load_config() -> Result<TgmarkConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TgmarkConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TgmarkConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the hierarchy lookup, the file must exist.
pub fn load_config_from_path(path: &Path) -> Result<TgmarkConfig, figment::Error> {
    if !path.is_file() {
        return Err(figment::Error::from(format!(
            "config file `{}` does not exist or is not a file",
            path.display()
        )));
    }

    Figment::new()
        .merge(Serialized::defaults(TgmarkConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(TgmarkConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `TGMARK_TELEGRAM_BOT_TOKEN` must map to `telegram.bot_token`,
/// not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("TGMARK_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a lowercased, prefix-stripped env var name to a dotted config key.
fn map_env_key(key: &str) -> String {
    for section in ["telegram", "table", "log"] {
        if let Some(field) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{field}");
        }
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("telegram_bot_token"), "telegram.bot_token");
        assert_eq!(map_env_key("telegram_chat_id"), "telegram.chat_id");
        assert_eq!(map_env_key("table_code_block"), "table.code_block");
        assert_eq!(map_env_key("log_level"), "log.level");
        assert_eq!(map_env_key("table_separator"), "table.separator");
        assert_eq!(map_env_key("unrelated"), "unrelated");
    }
}
