// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backslash escaping for Telegram MarkdownV2.
//!
//! MarkdownV2 treats a fixed set of characters as markup outside code
//! entities. Inside inline code and fenced code blocks only the backtick and
//! the backslash are significant, and inside a link target only the closing
//! parenthesis and the backslash are.

/// Characters that must be escaped in MarkdownV2 outside code entities.
pub const MARKUP_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\'',
    '`',
];

/// Characters that must be escaped inside inline code and code blocks.
pub const CODE_CHARS: &[char] = &['`', '\\'];

/// Characters that must be escaped inside the target part of an inline link.
pub const LINK_TARGET_CHARS: &[char] = &[')', '\\'];

/// Prefixes every occurrence of a character from `charset` with a backslash.
///
/// The rewrite is a single left-to-right pass over `input`, so backslashes
/// inserted by this function are never themselves considered for escaping.
pub fn escape(input: &str, charset: &[char]) -> String {
    if input.is_empty() || charset.is_empty() {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        if charset.contains(&ch) {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

/// Escapes general text against [`MARKUP_CHARS`].
pub fn escape_markup(input: &str) -> String {
    escape(input, MARKUP_CHARS)
}

/// Escapes code payloads against [`CODE_CHARS`].
pub fn escape_code(input: &str) -> String {
    escape(input, CODE_CHARS)
}

/// Escapes link targets against [`LINK_TARGET_CHARS`].
pub fn escape_link_target(input: &str) -> String {
    escape(input, LINK_TARGET_CHARS)
}

/// Counts the characters Telegram displays for a MarkdownV2 string.
///
/// Escaping backslashes, style delimiters, code fences with their language
/// tag, and link targets are not counted. Text inside code entities counts
/// literally apart from its escapes.
pub fn visible_len(markdown: &str) -> usize {
    let mut chars = markdown.chars().peekable();
    let mut count = 0;
    let mut in_code = false;
    let mut in_fence = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if chars.next().is_some() {
                    count += 1;
                }
            }
            '`' if chars.peek() == Some(&'`') => {
                chars.next();
                if chars.next_if_eq(&'`').is_none() {
                    // An empty inline code span.
                    continue;
                }
                in_fence = !in_fence;
                if in_fence {
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            break;
                        }
                    }
                }
            }
            '`' if !in_fence => in_code = !in_code,
            _ if in_code || in_fence => count += 1,
            '*' | '_' | '~' | '|' | '[' => {}
            ']' => {
                if chars.next_if_eq(&'(').is_some() {
                    while let Some(target) = chars.next() {
                        match target {
                            '\\' => {
                                chars.next();
                            }
                            ')' => break,
                            _ => {}
                        }
                    }
                }
            }
            _ => count += 1,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_string() {
        assert_eq!(escape_markup(""), "");
    }

    #[test]
    fn empty_charset_is_identity() {
        assert_eq!(escape("a*b_c", &[]), "a*b_c");
    }

    #[test]
    fn plain_text_no_special_chars() {
        assert_eq!(escape_markup("Hello world"), "Hello world");
    }

    #[test]
    fn escapes_dots_and_exclamation() {
        assert_eq!(escape_markup("Hello."), "Hello\\.");
        assert_eq!(escape_markup("Hello!"), "Hello\\!");
    }

    #[test]
    fn escapes_every_markup_character() {
        let input = "_*[]()~>#+-=|{}.!'`";
        let expected = "\\_\\*\\[\\]\\(\\)\\~\\>\\#\\+\\-\\=\\|\\{\\}\\.\\!\\'\\`";
        assert_eq!(escape_markup(input), expected);
    }

    #[test]
    fn backslash_is_not_markup() {
        assert_eq!(escape_markup("a\\b"), "a\\b");
    }

    #[test]
    fn code_charset_leaves_markup_alone() {
        assert_eq!(escape_code("*bold* `x` \\"), "*bold* \\`x\\` \\\\");
    }

    #[test]
    fn inserted_backslash_is_not_rescanned() {
        // A sequential replace of '`' then '\\' would turn "`" into "\\\\`".
        assert_eq!(escape_code("`"), "\\`");
        assert_eq!(escape_code("\\`"), "\\\\\\`");
    }

    #[test]
    fn link_target_escapes_only_closing_paren_and_backslash() {
        assert_eq!(
            escape_link_target("https://en.wikipedia.org/wiki/Rust_(language)"),
            "https://en.wikipedia.org/wiki/Rust_(language\\)"
        );
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(escape_markup("héllo — wörld!"), "héllo — wörld\\!");
    }

    #[test]
    fn visible_len_skips_escapes_and_delimiters() {
        assert_eq!(visible_len(&escape_markup("a.b!")), 4);
        assert_eq!(visible_len("*bold* _it_ ~s~ ||sp|| __u__"), 14);
        assert_eq!(visible_len("[docs](https://x.io/a_(b\\))"), 4);
    }

    #[test]
    fn visible_len_counts_code_contents() {
        assert_eq!(visible_len("`a*b`"), 3);
        assert_eq!(visible_len("`\\`x`"), 2);
        assert_eq!(visible_len("```rust\nlet x_y;```"), 8);
        assert_eq!(visible_len("``"), 0);
    }

    proptest! {
        #[test]
        fn prop_visible_len_of_escaped_text_is_input_len(s in "[^\\\\]{0,64}") {
            prop_assert_eq!(visible_len(&escape_markup(&s)), s.chars().count());
        }

        #[test]
        fn prop_escape_adds_one_backslash_per_match(s in ".*") {
            let matches = s.chars().filter(|c| MARKUP_CHARS.contains(c)).count();
            let escaped = escape_markup(&s);
            prop_assert_eq!(escaped.chars().count(), s.chars().count() + matches);
        }

        #[test]
        fn prop_removing_escapes_restores_input(s in "[a-z_*`\\\\ ]{0,32}") {
            let escaped = escape_code(&s);
            let mut restored = String::new();
            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        restored.push(next);
                    }
                } else {
                    restored.push(c);
                }
            }
            prop_assert_eq!(restored, s);
        }
    }
}
