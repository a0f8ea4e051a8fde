//! Tagged text fragments, the unit of all rendered output.

use std::fmt;

/// Presentation style attached to a fragment.
///
/// Tags name a paragraph-level style; a display surface decides what each
/// one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
pub enum StyleTag {
    #[default]
    None,
    Bold,
    Italic,
    Heading1,
    Heading2,
    Heading3,
    Centered,
    Bullet,
}

impl StyleTag {
    /// Short tag name, as used by text widgets.
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::None => "",
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::Heading1 => "h1",
            StyleTag::Heading2 => "h2",
            StyleTag::Heading3 => "h3",
            StyleTag::Centered => "center",
            StyleTag::Bullet => "bullet",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run of text carrying one style tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct TaggedFragment {
    pub text: String,
    pub tag: StyleTag,
}

impl TaggedFragment {
    pub fn new(text: impl Into<String>, tag: StyleTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    /// An untagged fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleTag::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fragment_has_no_tag() {
        let frag = TaggedFragment::plain("text");
        assert_eq!(frag.tag, StyleTag::None);
        assert_eq!(frag.text, "text");
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(StyleTag::Heading2.to_string(), "h2");
        assert_eq!(StyleTag::Centered.name(), "center");
    }
}
