//! yWriter inline markup conversion.
//!
//! yWriter marks inline formatting with bracketed tags: `[i]`/`[/i]` italic,
//! `[b]`/`[/b]` bold, `[h1]` highlighting, `[c]`/`[r]` alignment, `[s]`
//! strikethrough, `[u]` underline. Two conversions are provided:
//!
//! - [`strip_markup`]: drop every inline tag, keeping the text. Used for
//!   styled output, where formatting travels on the fragment's tag instead.
//! - [`markup_to_markdown`]: the legacy plain-text rendition. Paragraphs are
//!   separated by blank lines, italic/bold become `*`/`**`, comments become
//!   HTML comments, remaining tags are dropped.

use std::borrow::Cow;

use memchr::memchr;

use crate::fragment::TaggedFragment;

/// Target presentation of converted markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupMode {
    /// Tagged fragments; inline tags are stripped.
    #[default]
    Styled,
    /// Markdown-like plain text.
    Markdown,
}

/// Tag letters removed by [`strip_markup`].
const ALL_TAG_LETTERS: &[u8] = b"ibhcrsu";

/// Tag letters left over after Markdown substitution.
const NON_MARKDOWN_TAG_LETTERS: &[u8] = b"hcrsu";

/// Ordered substitutions for Markdown output. Order matters: spaces are moved
/// out of opening tags before the tags themselves are replaced.
const MARKDOWN_REPLACEMENTS: &[(&str, &str)] = &[
    ("\n", "\n\n"),
    ("[i] ", " [i]"),
    ("[b] ", " [b]"),
    ("[s] ", " [s]"),
    ("[i]", "*"),
    ("[/i]", "*"),
    ("[b]", "**"),
    ("[/b]", "**"),
    ("/*", "<!---"),
    ("*/", "--->"),
    ("  ", " "),
];

/// Convert optional markup for the given mode.
///
/// Absent input converts to an empty string.
///
/// # Examples
///
/// ```
/// use ywview::markup::{MarkupMode, convert};
///
/// assert_eq!(convert(Some("[i]Hi[/i]"), MarkupMode::Styled), "Hi");
/// assert_eq!(convert(Some("[i]Hi[/i]"), MarkupMode::Markdown), "*Hi*");
/// assert_eq!(convert(None, MarkupMode::Markdown), "");
/// ```
pub fn convert(text: Option<&str>, mode: MarkupMode) -> String {
    let Some(text) = text else {
        return String::new();
    };
    match mode {
        MarkupMode::Styled => strip_markup(text).into_owned(),
        MarkupMode::Markdown => markup_to_markdown(text),
    }
}

/// Convert optional markup into untagged fragments.
///
/// Body text is a single fragment; styling is applied per paragraph by the
/// view builder, not inside the text. Text that is empty once its tags are
/// stripped yields no fragment.
pub fn to_fragments(text: Option<&str>) -> Vec<TaggedFragment> {
    let stripped = strip_markup(text.unwrap_or_default());
    if stripped.is_empty() {
        Vec::new()
    } else {
        vec![TaggedFragment::plain(stripped)]
    }
}

/// Remove all inline tags (`[i]`, `[/b]`, `[h1]`, ...) from text.
///
/// A tag is `[`, any number of `/`, one of `i b h c r s u`, optional digits, `]`.
/// Returns the input unchanged (borrowed) when it contains no tags.
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    strip_tags(text, ALL_TAG_LETTERS)
}

/// Convert markup to Markdown-like plain text.
pub fn markup_to_markdown(text: &str) -> String {
    let mut result = text.to_string();
    for (from, to) in MARKDOWN_REPLACEMENTS {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }
    strip_tags(&result, NON_MARKDOWN_TAG_LETTERS).into_owned()
}

fn strip_tags<'a>(text: &'a str, letters: &[u8]) -> Cow<'a, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let start = pos + offset;
        match tag_end(bytes, start, letters) {
            Some(end) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[copied..start]);
                copied = end;
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// If a tag starts at `start`, return the index just past its closing `]`.
fn tag_end(bytes: &[u8], start: usize, letters: &[u8]) -> Option<usize> {
    let mut i = start + 1;
    while bytes.get(i) == Some(&b'/') {
        i += 1;
    }
    if !letters.contains(bytes.get(i)?) {
        return None;
    }
    i += 1;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    (bytes.get(i) == Some(&b']')).then_some(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::StyleTag;

    #[test]
    fn test_markdown_bold_and_italic() {
        assert_eq!(
            markup_to_markdown("Hello [b]world[/b] [i]now[/i]."),
            "Hello **world** *now*."
        );
    }

    #[test]
    fn test_strip_heading_tag() {
        assert_eq!(strip_markup("[h1]Title[/h1]"), "Title");
        assert_eq!(markup_to_markdown("[h1]Title[/h1]"), "Title");
    }

    #[test]
    fn test_strip_all_letters_and_digits() {
        assert_eq!(
            strip_markup("[i]a[/i][b]b[/b][c]c[/c][r]d[/r][s]e[/s][u]f[/u][h12]g[/h12]"),
            "abcdefg"
        );
    }

    #[test]
    fn test_strip_repeated_slashes() {
        assert_eq!(strip_markup("x[//b]y"), "xy");
    }

    #[test]
    fn test_strip_keeps_non_tags() {
        assert_eq!(strip_markup("[x] [] [i [b2x] [/]"), "[x] [] [i [b2x] [/]");
        assert_eq!(strip_markup("a [ [i]b"), "a [ b");
    }

    #[test]
    fn test_strip_borrows_when_untouched() {
        assert!(matches!(strip_markup("plain text"), Cow::Borrowed(_)));
        assert!(matches!(strip_markup("[i]x"), Cow::Owned(_)));
    }

    #[test]
    fn test_strip_handles_unicode_around_tags() {
        assert_eq!(strip_markup("Ärger [i]über[/i] Öl"), "Ärger über Öl");
    }

    #[test]
    fn test_markdown_doubles_paragraph_breaks() {
        assert_eq!(markup_to_markdown("one\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_markdown_moves_space_out_of_opening_tag() {
        assert_eq!(markup_to_markdown("a[i] b[/i]"), "a *b*");
    }

    #[test]
    fn test_markdown_comments() {
        assert_eq!(markup_to_markdown("a /*note*/ b"), "a <!---note---> b");
    }

    #[test]
    fn test_markdown_collapses_double_spaces() {
        assert_eq!(markup_to_markdown("a  b"), "a b");
        assert_eq!(markup_to_markdown("a    b"), "a  b");
    }

    #[test]
    fn test_markdown_drops_other_tags() {
        assert_eq!(markup_to_markdown("[c]centered[/c] [u]u[/u]"), "centered u");
    }

    #[test]
    fn test_convert_absent_is_empty() {
        assert_eq!(convert(None, MarkupMode::Styled), "");
        assert_eq!(convert(None, MarkupMode::Markdown), "");
    }

    #[test]
    fn test_to_fragments() {
        assert!(to_fragments(None).is_empty());
        assert!(to_fragments(Some("")).is_empty());
        assert!(to_fragments(Some("[i][/i]")).is_empty());
        let frags = to_fragments(Some("[b]body[/b]"));
        assert_eq!(frags, vec![TaggedFragment::new("body", StyleTag::None)]);
    }
}
