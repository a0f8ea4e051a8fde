//! Core data model for yWriter projects.
//!
//! This module contains:
//! - Project metadata and the chapter/scene tree
//! - Chapter and scene identifiers
//! - Scene inclusion status in both the type-code and the flag shape
//!
//! The model is read-only from the view pipeline's point of view: readers
//! construct it, [`crate::view::ViewBuilder`] only walks it.

mod project;

pub use project::{Chapter, ChapterId, Project, Scene, SceneId, SceneStatus};
