//! Markdown rendering of fragment streams.
//!
//! Each fragment becomes one block. Blocks are separated by a blank line,
//! except consecutive bullets, which form a tight list.

use crate::fragment::{StyleTag, TaggedFragment};

use super::DisplaySurface;

/// Render fragments to a Markdown string.
///
/// # Examples
///
/// ```
/// use ywview::display::render_markdown;
/// use ywview::fragment::{StyleTag, TaggedFragment};
///
/// let md = render_markdown(&[
///     TaggedFragment::new("Chapter\n", StyleTag::Heading2),
///     TaggedFragment::plain("Text\n"),
/// ]);
/// assert_eq!(md, "## Chapter\n\nText\n");
/// ```
pub fn render_markdown(fragments: &[TaggedFragment]) -> String {
    let mut pane = MarkdownPane::new();
    pane.render(fragments);
    pane.into_string()
}

/// A surface accumulating Markdown text.
#[derive(Debug, Clone, Default)]
pub struct MarkdownPane {
    output: String,
    last_tag: Option<StyleTag>,
}

impl MarkdownPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Markdown written so far, newline-terminated when non-empty.
    pub fn as_markdown(&self) -> String {
        let mut out = self.output.clone();
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn into_string(mut self) -> String {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }
}

impl DisplaySurface for MarkdownPane {
    fn clear(&mut self) {
        self.output.clear();
        self.last_tag = None;
    }

    fn append(&mut self, fragment: &TaggedFragment) {
        let text = fragment.text.trim_end_matches('\n');
        if text.is_empty() {
            return;
        }

        if let Some(last) = self.last_tag {
            if last == StyleTag::Bullet && fragment.tag == StyleTag::Bullet {
                self.output.push('\n');
            } else {
                self.output.push_str("\n\n");
            }
        }

        match fragment.tag {
            StyleTag::None | StyleTag::Centered => self.output.push_str(text),
            StyleTag::Bold => {
                self.output.push_str("**");
                self.output.push_str(text);
                self.output.push_str("**");
            }
            StyleTag::Italic => {
                self.output.push('*');
                self.output.push_str(text);
                self.output.push('*');
            }
            StyleTag::Heading1 => {
                self.output.push_str("# ");
                self.output.push_str(text);
            }
            StyleTag::Heading2 => {
                self.output.push_str("## ");
                self.output.push_str(text);
            }
            StyleTag::Heading3 => {
                self.output.push_str("### ");
                self.output.push_str(text);
            }
            StyleTag::Bullet => {
                self.output.push_str("- ");
                self.output.push_str(text);
            }
        }
        self.last_tag = Some(fragment.tag);
    }
}
