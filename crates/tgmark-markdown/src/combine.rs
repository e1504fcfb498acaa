// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Joining escaped values without re-escaping them.

use crate::styled::{StyledText, LINE_BREAK};

/// Concatenates `values` with no separator.
pub fn combine(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    join(values, "")
}

/// Concatenates `values` separated by a single space.
pub fn combine_with_space(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    join(values, " ")
}

/// Concatenates `values` separated by the line break literal.
pub fn combine_with_line_break(values: impl IntoIterator<Item = StyledText>) -> StyledText {
    join(values, LINE_BREAK)
}

fn join(values: impl IntoIterator<Item = StyledText>, separator: &str) -> StyledText {
    let mut out = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(value.as_str());
    }
    StyledText::from_escaped(out)
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        combine(iter)
    }
}
