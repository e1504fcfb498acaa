// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for styled MarkdownV2 composition.

use proptest::prelude::*;
use tgmark_markdown::*;

/// Returns the first markup character in `rendered` that is not preceded by
/// an escaping backslash.
fn first_unescaped_markup(rendered: &str) -> Option<char> {
    let mut chars = rendered.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if MARKUP_CHARS.contains(&c) {
            return Some(c);
        }
    }
    None
}

#[test]
fn nested_styles_render_exactly() {
    let got = bold([
        text("bold "),
        italic([
            text("italic bold "),
            strikethrough([
                text("italic bold strikethrough "),
                spoiler([text("italic bold strikethrough spoiler")]),
            ]),
            text(" "),
            underline([text("underline italic bold")]),
        ]),
        text(" bold"),
    ]);

    assert_eq!(
        got.as_str(),
        "*bold _italic bold ~italic bold strikethrough ||italic bold strikethrough spoiler||~ __underline italic bold___ bold*"
    );
}

#[test]
fn underline_and_italic_nest_in_either_order() {
    assert_eq!(underline([italic([text("x")])]), "___x___");
    assert_eq!(italic([underline([text("x")])]), "___x___");
}

#[test]
fn nested_values_are_never_escaped_twice() {
    let inner = text("1.5 * 2");
    assert_eq!(inner, "1\\.5 \\* 2");

    let wrapped = bold([italic([inner.clone()])]);
    assert_eq!(wrapped, "*_1\\.5 \\* 2_*");

    let combined = combine_with_space([wrapped.clone(), inner]);
    assert_eq!(combined, "*_1\\.5 \\* 2_* 1\\.5 \\* 2");

    // Feeding a combined value back into a combinator keeps it byte for byte.
    assert_eq!(spoiler([combined.clone()]).as_str(), format!("||{combined}||"));
}

#[test]
fn links_and_mentions_compose_with_styles() {
    let msg = combine_with_space([
        bold([mention("an_awsome_user")]),
        italic([inline_mention("an awsome user", "123456789")]),
        inline_link("docs (v2)", "https://example.org/a_(b)"),
    ]);
    assert_eq!(
        msg,
        "*@an_awsome_user* _[an awsome user](tg://user?id=123456789)_ [docs \\(v2\\)](https://example.org/a_(b\\))"
    );
}

#[test]
fn code_leaves_pass_payload_through() {
    let msg = combine_with_line_break([
        inline_code("a.b()"),
        code_block("go", "fmt.Println(\"hi!\")\n"),
    ]);
    assert_eq!(msg, "`a.b()`\\\\n```go\nfmt.Println(\"hi!\")\n```\n");
}

#[test]
fn hashtag_examples() {
    assert_eq!(hashtag("several words"), "\\#several\\_words");
    assert_eq!(hashtag("several-words"), "\\#several\\_words");
}

#[test]
fn table_embeds_into_a_message() {
    let mut table = Table::new();
    table.add_columns([Column::new(4).align(Alignment::Left), Column::new(4)]);
    table.add_row(["a", "b"]);

    let msg = combine_with_line_break([bold_text("Totals:"), table.to_styled()]);
    assert_eq!(msg, "*Totals:*\\\\n`a      b`");
}

proptest! {
    #[test]
    fn prop_text_never_leaks_markup(s in "[^\\\\]{0,64}") {
        prop_assert_eq!(first_unescaped_markup(text(&s).as_str()), None);
    }

    #[test]
    fn prop_only_delimiters_are_unescaped(s in "[^\\\\]{0,64}") {
        for style in [Style::Bold, Style::Italic, Style::Underline, Style::Strikethrough, Style::Spoiler] {
            let rendered = style.apply([text(&s)]).into_string();
            let delimiter = style.delimiter();
            let inner = &rendered[delimiter.len()..rendered.len() - delimiter.len()];
            prop_assert_eq!(first_unescaped_markup(inner), None);
        }
    }

    #[test]
    fn prop_sugar_equals_wrapped_text(s in ".{0,32}") {
        prop_assert_eq!(bold([text(&s)]), bold_text(&s));
        prop_assert_eq!(italic([text(&s)]), italic_text(&s));
        prop_assert_eq!(underline([text(&s)]), underline_text(&s));
        prop_assert_eq!(strikethrough([text(&s)]), strikethrough_text(&s));
        prop_assert_eq!(spoiler([text(&s)]), spoiler_text(&s));
    }

    #[test]
    fn prop_combine_preserves_children(a in ".{0,16}", b in ".{0,16}") {
        let left = text(&a);
        let right = bold_text(&b);
        let joined = combine([left.clone(), right.clone()]);
        prop_assert_eq!(joined.into_string(), format!("{left}{right}"));
    }
}
