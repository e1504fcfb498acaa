// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Escaped text values and the leaf constructors that produce them.
//!
//! A [`StyledText`] can only be obtained from a constructor that has already
//! escaped its input, so any value can be wrapped or combined again without
//! being escaped a second time.

use std::fmt;

use crate::escape::{escape_link_target, escape_markup};

/// Line break literal emitted by [`line_break`] and
/// [`combine_with_line_break`](crate::combine_with_line_break).
pub const LINE_BREAK: &str = "\\\\n";

/// Prefix of the deep link used by [`inline_mention`].
const USER_LINK_PREFIX: &str = "tg://user?id=";

/// A fragment of MarkdownV2 output whose text is already escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyledText {
    text: String,
}

impl StyledText {
    /// Wraps text the caller vouches is already valid MarkdownV2.
    ///
    /// No escaping is applied. Passing raw user text here lets unescaped
    /// markup characters reach the output; use [`text`] for user input.
    pub fn from_escaped(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the rendered MarkdownV2 text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the value and returns the rendered MarkdownV2 text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length of the rendered text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for StyledText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<StyledText> for String {
    fn from(value: StyledText) -> Self {
        value.text
    }
}

impl PartialEq<str> for StyledText {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for StyledText {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for StyledText {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}

/// Plain text with every markup character escaped.
pub fn text(input: &str) -> StyledText {
    StyledText {
        text: escape_markup(input),
    }
}

/// A single space.
pub fn space() -> StyledText {
    StyledText::from_escaped(" ")
}

/// The line break literal.
pub fn line_break() -> StyledText {
    StyledText::from_escaped(LINE_BREAK)
}

/// `[label](url)` with the label escaped as text and the url escaped as a
/// link target.
pub fn inline_link(label: &str, url: &str) -> StyledText {
    StyledText {
        text: format!("[{}]({})", escape_markup(label), escape_link_target(url)),
    }
}

/// `@username`. Telegram usernames are limited to letters, digits and
/// underscores, and the underscore is not escaped inside a mention.
pub fn mention(username: &str) -> StyledText {
    StyledText {
        text: format!("@{username}"),
    }
}

/// An inline link to a user by numeric id, shown as `label`.
pub fn inline_mention(label: &str, user_id: &str) -> StyledText {
    inline_link(label, &format!("{USER_LINK_PREFIX}{user_id}"))
}

/// `\#tag`. Hashtags must be a single word, so every run of whitespace and
/// every dash becomes an escaped underscore.
pub fn hashtag(input: &str) -> StyledText {
    let mut tag = String::with_capacity(input.len() + 2);
    tag.push_str("\\#");

    let mut in_whitespace = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                tag.push_str("\\_");
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if ch == '-' {
            tag.push_str("\\_");
        } else {
            let mut buf = [0u8; 4];
            tag.push_str(&escape_markup(ch.encode_utf8(&mut buf)));
        }
    }

    StyledText { text: tag }
}

/// `` `code` ``. The payload is passed through untouched and must not
/// contain a backtick.
pub fn inline_code(input: &str) -> StyledText {
    StyledText {
        text: format!("`{input}`"),
    }
}

/// A fenced code block with an optional language tag. The payload is passed
/// through untouched.
pub fn code_block(language: &str, input: &str) -> StyledText {
    StyledText {
        text: format!("```{language}\n{input}```\n"),
    }
}

/// A fenced code block without a language tag.
pub fn preformatted(input: &str) -> StyledText {
    code_block("", input)
}
