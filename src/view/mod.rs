//! Quick views of a project.
//!
//! A [`ViewBuilder`] walks a [`Project`](crate::model::Project) once and
//! produces a [`ViewBundle`]: six ordered fragment streams plus chapter,
//! scene and word counts. A [`ViewStore`] keeps the bundle of the currently
//! open project.
//!
//! ```
//! use ywview::model::{Chapter, ChapterId, Project, Scene, SceneId};
//! use ywview::view::{ViewBuilder, ViewKind};
//!
//! let mut project = Project::new().with_title("Demo");
//! project.add_scene(SceneId(1), Scene::new("Arrival").with_word_count(120));
//! project.add_chapter(ChapterId(1), Chapter::new("One").with_scene(SceneId(1)));
//!
//! let bundle = ViewBuilder::new().build(&project);
//! assert_eq!(bundle.summary, "1 chapters, 1 scenes, 120 words");
//! assert_eq!(bundle.get(ViewKind::ChapterTitles)[0].text, "One\n");
//! ```

mod builder;
mod store;

pub use builder::ViewBuilder;
pub use store::ViewStore;

use std::fmt;
use std::str::FromStr;

use crate::filter::LegacyChapterRule;
use crate::fragment::TaggedFragment;
use crate::i18n::{Translate, Untranslated, msg};
use crate::markup::MarkupMode;

/// Selector for one of the six fragment streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "kebab-case"))]
pub enum ViewKind {
    ProjectDescription,
    ChapterTitles,
    ChapterDescriptions,
    SceneTitles,
    SceneDescriptions,
    SceneContents,
}

impl ViewKind {
    /// All views, in menu order.
    pub const ALL: [ViewKind; 6] = [
        ViewKind::ProjectDescription,
        ViewKind::ChapterTitles,
        ViewKind::ChapterDescriptions,
        ViewKind::SceneTitles,
        ViewKind::SceneDescriptions,
        ViewKind::SceneContents,
    ];

    /// Stable kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            ViewKind::ProjectDescription => "project-description",
            ViewKind::ChapterTitles => "chapter-titles",
            ViewKind::ChapterDescriptions => "chapter-descriptions",
            ViewKind::SceneTitles => "scene-titles",
            ViewKind::SceneDescriptions => "scene-descriptions",
            ViewKind::SceneContents => "scene-contents",
        }
    }

    /// Message id shown when the view has nothing to show.
    pub(crate) fn placeholder_msgid(self) -> &'static str {
        match self {
            ViewKind::ProjectDescription => msg::NO_PROJECT_DESCRIPTION,
            ViewKind::ChapterTitles => msg::NO_CHAPTER_TITLES,
            ViewKind::ChapterDescriptions => msg::NO_CHAPTER_DESCRIPTIONS,
            ViewKind::SceneTitles => msg::NO_SCENE_TITLES,
            ViewKind::SceneDescriptions => msg::NO_SCENE_DESCRIPTIONS,
            ViewKind::SceneContents => msg::NO_SCENE_CONTENTS,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = ViewKind::ALL.iter().map(|k| k.name()).collect();
                format!("unknown view '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Totals over included chapters and scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Statistics {
    pub chapters: usize,
    pub scenes: usize,
    pub words: u64,
}

impl Statistics {
    /// One-line summary, e.g. `3 chapters, 12 scenes, 40213 words`.
    pub fn summary(&self, translate: &dyn Translate) -> String {
        format!(
            "{} {}, {} {}, {} {}",
            self.chapters,
            translate.translate(msg::CHAPTERS),
            self.scenes,
            translate.translate(msg::SCENES),
            self.words,
            translate.translate(msg::WORDS),
        )
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(&Untranslated))
    }
}

/// Everything the viewer can display for one open project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ViewBundle {
    /// Project title, or the translated "Untitled project".
    pub title: String,
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub author: Option<String>,
    pub description: Vec<TaggedFragment>,
    pub chapter_titles: Vec<TaggedFragment>,
    pub chapter_descriptions: Vec<TaggedFragment>,
    pub scene_titles: Vec<TaggedFragment>,
    pub scene_descriptions: Vec<TaggedFragment>,
    pub scene_contents: Vec<TaggedFragment>,
    pub statistics: Statistics,
    /// Translated statistics line for status display.
    pub summary: String,
}

impl ViewBundle {
    pub fn get(&self, kind: ViewKind) -> &[TaggedFragment] {
        match kind {
            ViewKind::ProjectDescription => &self.description,
            ViewKind::ChapterTitles => &self.chapter_titles,
            ViewKind::ChapterDescriptions => &self.chapter_descriptions,
            ViewKind::SceneTitles => &self.scene_titles,
            ViewKind::SceneDescriptions => &self.scene_descriptions,
            ViewKind::SceneContents => &self.scene_contents,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: ViewKind) -> &mut Vec<TaggedFragment> {
        match kind {
            ViewKind::ProjectDescription => &mut self.description,
            ViewKind::ChapterTitles => &mut self.chapter_titles,
            ViewKind::ChapterDescriptions => &mut self.chapter_descriptions,
            ViewKind::SceneTitles => &mut self.scene_titles,
            ViewKind::SceneDescriptions => &mut self.scene_descriptions,
            ViewKind::SceneContents => &mut self.scene_contents,
        }
    }
}

/// Configuration for view building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Styled fragments or Markdown-like plain text.
    pub mode: MarkupMode,
    /// How legacy chapter type codes combine.
    pub chapter_rule: LegacyChapterRule,
}

impl ViewConfig {
    pub fn with_mode(mut self, mode: MarkupMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_chapter_rule(mut self, rule: LegacyChapterRule) -> Self {
        self.chapter_rule = rule;
        self
    }
}
