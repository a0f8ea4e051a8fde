//! Project, chapter and scene types.

use std::collections::HashMap;

/// Unique identifier for a chapter within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChapterId(pub u32);

/// Unique identifier for a scene within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub u32);

/// A parsed novel project.
///
/// Chapters and scenes are stored by id; `chapter_order` and each chapter's
/// `scene_ids` define display order. The view pipeline only ever reads a
/// project, it never mutates one.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Project description (markup).
    pub description: Option<String>,
    pub chapter_order: Vec<ChapterId>,
    pub chapters: HashMap<ChapterId, Chapter>,
    pub scenes: HashMap<SceneId, Scene>,
}

/// A chapter (or, when `level != 0`, a part-like grouping heading).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    pub title: Option<String>,
    /// Chapter description (markup).
    pub description: Option<String>,
    /// 0 = regular chapter, nonzero = higher-level grouping.
    pub level: u8,
    /// Type code: 0 = normal, nonzero = excluded.
    pub chapter_type: u8,
    /// Legacy type code carried by older file versions.
    ///
    /// `None` for files that only know the single type code.
    pub old_type: Option<u8>,
    pub is_unused: bool,
    /// The chapter is the project's trash bin.
    pub is_trash: bool,
    pub scene_ids: Vec<SceneId>,
}

/// A scene, the unit of body text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    pub title: Option<String>,
    /// Scene description (markup).
    pub description: Option<String>,
    /// Full body text (markup).
    pub content: Option<String>,
    pub word_count: Option<u32>,
    pub status: SceneStatus,
}

/// Inclusion status of a scene, in either of the two shapes project files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneStatus {
    /// Single type code: 0 = normal, nonzero = excluded.
    Type(u8),
    /// Three independent flags; the scene is included only if none is set.
    Flags { unused: bool, notes: bool, todo: bool },
}

impl Default for SceneStatus {
    fn default() -> Self {
        SceneStatus::Type(0)
    }
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a chapter at the end of the display order.
    ///
    /// Re-adding an existing id replaces the chapter but keeps its position.
    pub fn add_chapter(&mut self, id: ChapterId, chapter: Chapter) {
        if self.chapters.insert(id, chapter).is_none() {
            self.chapter_order.push(id);
        }
    }

    /// Register a scene. Scenes are placed via [`Chapter::scene_ids`].
    pub fn add_scene(&mut self, id: SceneId, scene: Scene) {
        self.scenes.insert(id, scene);
    }

    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.get(&id)
    }

    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(&id)
    }

    /// Chapters in display order, skipping ids with no chapter behind them.
    pub fn chapters_in_order(&self) -> impl Iterator<Item = (ChapterId, &Chapter)> {
        self.chapter_order
            .iter()
            .filter_map(|id| self.chapters.get(id).map(|ch| (*id, ch)))
    }

    /// Scenes of a chapter in display order, skipping dangling ids.
    pub fn scenes_of<'a>(
        &'a self,
        chapter: &'a Chapter,
    ) -> impl Iterator<Item = (SceneId, &'a Scene)> + 'a {
        chapter
            .scene_ids
            .iter()
            .filter_map(|id| self.scenes.get(id).map(|sc| (*id, sc)))
    }
}

impl Chapter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_type(mut self, chapter_type: u8) -> Self {
        self.chapter_type = chapter_type;
        self
    }

    pub fn with_old_type(mut self, old_type: u8) -> Self {
        self.old_type = Some(old_type);
        self
    }

    pub fn unused(mut self) -> Self {
        self.is_unused = true;
        self
    }

    pub fn with_scene(mut self, id: SceneId) -> Self {
        self.scene_ids.push(id);
        self
    }
}

impl Scene {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_word_count(mut self, words: u32) -> Self {
        self.word_count = Some(words);
        self
    }

    pub fn with_status(mut self, status: SceneStatus) -> Self {
        self.status = status;
        self
    }
}
