//! Message translation.
//!
//! The view pipeline never hardcodes user-facing words; it passes English
//! message ids through a [`Translate`] implementation supplied by the host.

use std::borrow::Cow;
use std::collections::HashMap;

/// Message ids used by the view builder.
pub mod msg {
    pub const NO_PROJECT_DESCRIPTION: &str = "No project description available";
    pub const NO_CHAPTER_TITLES: &str = "No chapter titles available";
    pub const NO_CHAPTER_DESCRIPTIONS: &str = "No chapter descriptions available";
    pub const NO_SCENE_TITLES: &str = "No scene titles available";
    pub const NO_SCENE_DESCRIPTIONS: &str = "No scene descriptions available";
    pub const NO_SCENE_CONTENTS: &str = "No scene contents available";
    pub const CHAPTERS: &str = "chapters";
    pub const SCENES: &str = "scenes";
    pub const WORDS: &str = "words";
    pub const UNTITLED_PROJECT: &str = "Untitled project";
}

/// Translation function from message id to display text.
pub trait Translate {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Identity translation: every message id is its own English text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// A message table. Ids without an entry fall back to the id itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, msgid: impl Into<String>, text: impl Into<String>) {
        self.messages.insert(msgid.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl Translate for Catalog {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.get(msgid) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(msgid),
        }
    }
}
