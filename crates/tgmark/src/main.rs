// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! tgmark - render and send Telegram MarkdownV2 messages.
//!
//! This is the binary entry point. Every subcommand builds one escaped
//! MarkdownV2 value and either prints it or delivers it to a chat.

mod render;
mod send;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tgmark_config::TgmarkConfig;
use tgmark_markdown::Style;
use tgmark_telegram::TelegramTransport;

/// Render and send Telegram MarkdownV2 messages.
#[derive(Parser, Debug)]
#[command(name = "tgmark", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Chat to deliver to, overriding `telegram.chat_id`.
    #[arg(long, global = true)]
    chat_id: Option<String>,

    /// Deliver the message instead of printing it.
    #[arg(long, global = true)]
    send: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Plain escaped text. Words are joined with spaces.
    Text {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Escaped text in one style (bold, italic, underline, strikethrough, spoiler).
    Style { style: Style, text: String },
    /// An inline link.
    Link { label: String, url: String },
    /// A `@username` mention.
    Mention { username: String },
    /// A hashtag. Spaces and dashes become underscores.
    Hashtag { text: String },
    /// A fenced code block.
    Code {
        #[arg(long, default_value = "")]
        language: String,
        text: String,
    },
    /// A fixed-width table. Rows come from `--row` or from stdin.
    Table(render::TableArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tgmark_config::load_and_validate_path(path),
        None => tgmark_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tgmark_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    if let Err(e) = run(cli, &config).await {
        eprintln!("tgmark: {}", error_chain(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &TgmarkConfig) -> Result<(), tgmark_core::TgmarkError> {
    let body = {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        render::render(&cli.command, config, &mut input)?
    };

    if !cli.send {
        println!("{body}");
        return Ok(());
    }

    let chat_id = cli
        .chat_id
        .or_else(|| config.telegram.chat_id.clone())
        .ok_or_else(|| {
            tgmark_core::TgmarkError::Config(
                "no chat to send to: pass --chat-id or set telegram.chat_id".into(),
            )
        })?;

    let transport = TelegramTransport::new(&config.telegram)?;
    let receipt = send::deliver(
        &transport,
        &chat_id,
        body,
        config.telegram.disable_notification,
    )
    .await?;

    println!("{}", receipt.message_id.0);
    Ok(())
}

/// Formats an error followed by each of its causes, separated by `: `.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Initialize the tracing subscriber. Logs go to stderr so rendered output
/// on stdout stays clean.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tgmark={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
