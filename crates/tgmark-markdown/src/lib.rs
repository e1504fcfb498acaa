// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram MarkdownV2 text building.
//!
//! Build a message bottom-up from escaped leaves ([`text`], [`inline_link`],
//! [`hashtag`], ...), wrap them with style combinators ([`bold`], [`italic`],
//! ...), join siblings with [`combine`] and friends, and read the result with
//! [`StyledText::as_str`]. Every [`StyledText`] is escaped when it is built,
//! so nesting never escapes anything twice.
//!
//! ```
//! use tgmark_markdown::{bold, italic, text};
//!
//! let msg = bold([text("price: "), italic([text("9.99!")])]);
//! assert_eq!(msg.as_str(), "*price: _9\\.99\\!_*");
//! ```
//!
//! [`Table`] lays out fixed-width rows as inline code spans or as one fenced
//! code block.

pub mod combine;
pub mod escape;
pub mod style;
pub mod styled;
pub mod table;

pub use combine::{combine, combine_with_line_break, combine_with_space};
pub use escape::{escape, visible_len, CODE_CHARS, LINK_TARGET_CHARS, MARKUP_CHARS};
pub use style::{
    bold, bold_text, italic, italic_text, spoiler, spoiler_text, strikethrough,
    strikethrough_text, underline, underline_text, Style,
};
pub use styled::{
    code_block, hashtag, inline_code, inline_link, inline_mention, line_break, mention,
    preformatted, space, text, StyledText, LINE_BREAK,
};
pub use table::{pad_cell, Alignment, Column, Table, TableOptions};
