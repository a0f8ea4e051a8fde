//! In-memory rich text surface.

use std::ops::Range;

use crate::fragment::{StyleTag, TaggedFragment};

use super::DisplaySurface;

/// A styled byte range within a [`TextPane`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub range: Range<usize>,
    pub tag: StyleTag,
}

/// Concatenated fragment text with the byte ranges of styled runs.
///
/// Untagged fragments contribute text but no span.
#[derive(Debug, Clone, Default)]
pub struct TextPane {
    text: String,
    spans: Vec<TagSpan>,
}

impl TextPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[TagSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Tag in effect at a byte offset, [`StyleTag::None`] outside any span.
    pub fn tag_at(&self, offset: usize) -> StyleTag {
        self.spans
            .iter()
            .find(|span| span.range.contains(&offset))
            .map_or(StyleTag::None, |span| span.tag)
    }
}

impl DisplaySurface for TextPane {
    fn clear(&mut self) {
        self.text.clear();
        self.spans.clear();
    }

    fn append(&mut self, fragment: &TaggedFragment) {
        let start = self.text.len();
        self.text.push_str(&fragment.text);
        if fragment.tag != StyleTag::None && !fragment.text.is_empty() {
            self.spans.push(TagSpan {
                range: start..self.text.len(),
                tag: fragment.tag,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_concatenates_in_order() {
        let mut pane = TextPane::new();
        pane.render(&[
            TaggedFragment::new("H\n", StyleTag::Heading2),
            TaggedFragment::plain("body\n"),
            TaggedFragment::new("* * *\n", StyleTag::Centered),
        ]);

        assert_eq!(pane.text(), "H\nbody\n* * *\n");
        assert_eq!(
            pane.spans(),
            &[
                TagSpan {
                    range: 0..2,
                    tag: StyleTag::Heading2
                },
                TagSpan {
                    range: 7..13,
                    tag: StyleTag::Centered
                },
            ]
        );
        assert_eq!(pane.tag_at(0), StyleTag::Heading2);
        assert_eq!(pane.tag_at(3), StyleTag::None);
        assert_eq!(pane.tag_at(8), StyleTag::Centered);
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut pane = TextPane::new();
        pane.render(&[TaggedFragment::new("old", StyleTag::Bold)]);
        pane.render(&[TaggedFragment::plain("new")]);

        assert_eq!(pane.text(), "new");
        assert!(pane.spans().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut pane = TextPane::new();
        pane.append(&TaggedFragment::new("x", StyleTag::Italic));
        pane.clear();

        assert!(pane.is_empty());
        assert!(pane.spans().is_empty());
    }
}
