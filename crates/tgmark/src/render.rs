// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns a parsed subcommand into one escaped MarkdownV2 value.

use std::io::BufRead;
use std::str::FromStr;

use clap::Args;
use tgmark_config::{TableConfig, TgmarkConfig};
use tgmark_core::TgmarkError;
use tgmark_markdown::escape::escape_code;
use tgmark_markdown::{
    code_block, hashtag, inline_link, mention, text, Alignment, Column, StyledText,
};
use tracing::debug;

use crate::Commands;

/// Options of the `table` subcommand.
#[derive(Args, Debug, Default)]
pub struct TableArgs {
    /// Column layout, repeatable. Without it every cell gets a column built
    /// from the `[table]` defaults.
    #[arg(long = "column", value_name = "WIDTH[:ALIGN[:MARGIN]]")]
    pub columns: Vec<String>,

    /// Header cells, split on the delimiter.
    #[arg(long)]
    pub header: Option<String>,

    /// Row cells, split on the delimiter. Repeatable. Without it rows are
    /// read from stdin, one per line.
    #[arg(long = "row")]
    pub rows: Vec<String>,

    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// Placed between cells, overriding `table.separator`.
    #[arg(long)]
    pub separator: Option<String>,

    /// Render the whole table as one code block.
    #[arg(long)]
    pub code_block: bool,
}

/// Builds the message body for `command`. `input` is only read by `table`
/// when no `--row` was given.
pub fn render(
    command: &Commands,
    config: &TgmarkConfig,
    input: &mut dyn BufRead,
) -> Result<StyledText, TgmarkError> {
    let body = match command {
        Commands::Text { text: words } => text(&words.join(" ")),
        Commands::Style { style, text: input } => style.apply_text(input),
        Commands::Link { label, url } => inline_link(label, url),
        Commands::Mention { username } => mention(username.trim_start_matches('@')),
        Commands::Hashtag { text: input } => hashtag(input.trim_start_matches('#')),
        Commands::Code { language, text: input } => code_block(language, &escape_code(input)),
        Commands::Table(args) => render_table(args, &config.table, input)?,
    };
    debug!(len = body.len(), "rendered message body");
    Ok(body)
}

fn render_table(
    args: &TableArgs,
    defaults: &TableConfig,
    input: &mut dyn BufRead,
) -> Result<StyledText, TgmarkError> {
    if args.delimiter.is_empty() {
        return Err(TgmarkError::InvalidInput("delimiter must not be empty".into()));
    }

    let header = args
        .header
        .as_deref()
        .map(|h| split_cells(h, &args.delimiter));

    let rows: Vec<Vec<String>> = if args.rows.is_empty() {
        read_rows(input, &args.delimiter)?
    } else {
        args.rows
            .iter()
            .map(|r| split_cells(r, &args.delimiter))
            .collect()
    };

    let columns = if args.columns.is_empty() {
        let count = header
            .iter()
            .chain(rows.iter())
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        vec![defaults.default_column(); count]
    } else {
        args.columns
            .iter()
            .map(|spec| parse_column_spec(spec, defaults))
            .collect::<Result<_, _>>()?
    };

    let mut table = defaults.new_table();
    if let Some(separator) = &args.separator {
        table.set_separator(separator.as_str());
    }
    if args.code_block {
        table.set_code_block(true);
    }
    table.add_columns(columns);
    if let Some(header) = header {
        table.set_header(header);
    }
    for row in rows {
        table.add_row(row);
    }

    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "built table"
    );
    Ok(table.to_styled())
}

fn split_cells(line: &str, delimiter: &str) -> Vec<String> {
    line.split(delimiter).map(|c| c.trim().to_string()).collect()
}

fn read_rows(input: &mut dyn BufRead, delimiter: &str) -> Result<Vec<Vec<String>>, TgmarkError> {
    let mut rows = Vec::new();
    for line in input.lines() {
        let line = line.map_err(|e| TgmarkError::InvalidInput(format!("reading rows: {e}")))?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(split_cells(&line, delimiter));
    }
    Ok(rows)
}

/// Parses `WIDTH[:ALIGN[:MARGIN]]`. Missing or empty parts fall back to the
/// `[table]` defaults.
pub fn parse_column_spec(spec: &str, defaults: &TableConfig) -> Result<Column, TgmarkError> {
    let invalid = |why: String| TgmarkError::InvalidInput(format!("column `{spec}`: {why}"));

    let mut parts = spec.split(':');
    let mut column = defaults.default_column();

    let width = parts.next().unwrap_or_default();
    column.width = width
        .parse()
        .map_err(|_| invalid(format!("width `{width}` is not a number")))?;

    if let Some(align) = parts.next().filter(|a| !a.is_empty()) {
        column.align = Alignment::from_str(align)
            .map_err(|_| invalid(format!("unknown alignment `{align}`")))?;
    }

    if let Some(margin) = parts.next().filter(|m| !m.is_empty()) {
        column.margin = margin
            .parse()
            .map_err(|_| invalid(format!("margin `{margin}` is not a number")))?;
    }

    if parts.next().is_some() {
        return Err(invalid("expected WIDTH[:ALIGN[:MARGIN]]".into()));
    }
    Ok(column)
}
