// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style combinators.
//!
//! Every combinator concatenates already-escaped children and wraps them in
//! the style's delimiter pair. The delimiters are added after escaping, so
//! they are never escaped themselves, and the result is an escaped value an
//! enclosing combinator can wrap again.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::styled::{text, StyledText};

/// Inline styles supported by MarkdownV2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Spoiler,
}

impl Style {
    /// The delimiter written on both sides of styled content.
    pub fn delimiter(self) -> &'static str {
        match self {
            Style::Bold => "*",
            Style::Italic => "_",
            Style::Underline => "__",
            Style::Strikethrough => "~",
            Style::Spoiler => "||",
        }
    }

    /// Concatenates `values` and wraps them in this style.
    pub fn apply(self, values: impl IntoIterator<Item = StyledText>) -> StyledText {
        let delimiter = self.delimiter();
        let mut out = String::from(delimiter);
        for value in values {
            out.push_str(value.as_str());
        }
        out.push_str(delimiter);
        StyledText::from_escaped(out)
    }

    /// Escapes `input` as plain text and wraps it in this style.
    pub fn apply_text(self, input: &str) -> StyledText {
        self.apply([text(input)])
    }
}

/// `*bold*`
pub fn bold(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    Style::Bold.apply(values)
}

pub fn bold_text(input: &str) -> StyledText {
    Style::Bold.apply_text(input)
}

/// `_italic_`
pub fn italic(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    Style::Italic.apply(values)
}

pub fn italic_text(input: &str) -> StyledText {
    Style::Italic.apply_text(input)
}

/// `__underline__`
pub fn underline(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    Style::Underline.apply(values)
}

pub fn underline_text(input: &str) -> StyledText {
    Style::Underline.apply_text(input)
}

/// `~strikethrough~`
pub fn strikethrough(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    Style::Strikethrough.apply(values)
}

pub fn strikethrough_text(input: &str) -> StyledText {
    Style::Strikethrough.apply_text(input)
}

/// `||spoiler||`
pub fn spoiler(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    Style::Spoiler.apply(values)
}

pub fn spoiler_text(input: &str) -> StyledText {
    Style::Spoiler.apply_text(input)
}
