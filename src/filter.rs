//! Inclusion rules: which chapters and scenes take part in the views.
//!
//! Both predicates are pure. They understand both status shapes a project
//! may carry (single type code, or the legacy flag set) so that callers
//! never look at the raw fields themselves.

use crate::model::{Chapter, Scene, SceneStatus};

/// How the legacy pair of chapter type codes is combined.
///
/// Older yWriter files carry both `chapter_type` and `old_type`. Viewers have
/// differed on whether one or both must be nonzero for the chapter to be
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegacyChapterRule {
    /// Excluded only if both codes are nonzero.
    #[default]
    RequireBoth,
    /// Excluded if either code is nonzero.
    EitherField,
}

/// Whether a chapter participates in any view.
///
/// Unused and trash chapters are always excluded. Without a legacy code,
/// a nonzero type code excludes the chapter.
pub fn chapter_included(chapter: &Chapter, rule: LegacyChapterRule) -> bool {
    if chapter.is_unused || chapter.is_trash {
        return false;
    }
    match chapter.old_type {
        None => chapter.chapter_type == 0,
        Some(old_type) => match rule {
            LegacyChapterRule::RequireBoth => chapter.chapter_type == 0 || old_type == 0,
            LegacyChapterRule::EitherField => chapter.chapter_type == 0 && old_type == 0,
        },
    }
}

/// Whether a scene participates in any view.
pub fn scene_included(scene: &Scene) -> bool {
    match scene.status {
        SceneStatus::Type(code) => code == 0,
        SceneStatus::Flags {
            unused,
            notes,
            todo,
        } => !(unused || notes || todo),
    }
}
