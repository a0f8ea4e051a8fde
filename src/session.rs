//! Open/close lifecycle of a viewed project.
//!
//! A [`Session`] ties a [`ViewBuilder`], a [`ViewStore`] and a display
//! surface together the way a viewer window does: opening a project builds
//! its views and shows the project description, selecting a view renders
//! it, closing drops the views and clears the surface.

use std::path::Path;

use tracing::info;

use crate::display::DisplaySurface;
use crate::error::Result;
use crate::model::Project;
use crate::reader::read_project;
use crate::view::{ViewBuilder, ViewBundle, ViewKind, ViewStore};

/// A viewer session showing at most one project at a time.
pub struct Session<S: DisplaySurface> {
    builder: ViewBuilder,
    store: ViewStore,
    surface: S,
}

impl<S: DisplaySurface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self::with_builder(ViewBuilder::new(), surface)
    }

    pub fn with_builder(builder: ViewBuilder, surface: S) -> Self {
        Self {
            builder,
            store: ViewStore::new(),
            surface,
        }
    }

    /// Read a project file and open it.
    ///
    /// On a read error the currently open project, if any, stays open.
    /// Returns the statistics line.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<&str> {
        let project = read_project(path)?;
        Ok(self.open_project(&project))
    }

    /// Open an already parsed project, replacing the current one.
    ///
    /// The new views are built completely before the old ones are dropped.
    /// Shows the project description and returns the statistics line.
    pub fn open_project(&mut self, project: &Project) -> &str {
        let bundle = self.builder.build(project);
        info!(title = %bundle.title, summary = %bundle.summary, "opened project");
        self.store.load(bundle);
        self.show(ViewKind::ProjectDescription);
        self.store.summary()
    }

    /// Render one view onto the surface. Does nothing when no project is open.
    pub fn show(&mut self, kind: ViewKind) {
        if self.store.is_loaded() {
            self.surface.render(self.store.view(kind));
        }
    }

    /// Close the project: drop all views and clear the surface.
    pub fn close(&mut self) {
        if self.store.is_loaded() {
            info!("closed project");
        }
        self.store.reset();
        self.surface.clear();
    }

    pub fn is_open(&self) -> bool {
        self.store.is_loaded()
    }

    /// Statistics line of the open project, empty when closed.
    pub fn status(&self) -> &str {
        self.store.summary()
    }

    pub fn bundle(&self) -> Option<&ViewBundle> {
        self.store.bundle()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::TextPane;
    use crate::fragment::StyleTag;
    use crate::model::{Chapter, ChapterId, Scene, SceneId};

    fn project() -> Project {
        let mut project = Project::new().with_title("Demo").with_description("About");
        project.add_scene(SceneId(1), Scene::new("S").with_content("body").with_word_count(1));
        project.add_chapter(ChapterId(1), Chapter::new("C").with_scene(SceneId(1)));
        project
    }

    #[test]
    fn test_open_shows_description() {
        let mut session = Session::new(TextPane::new());
        let status = session.open_project(&project()).to_string();

        assert_eq!(status, "1 chapters, 1 scenes, 1 words");
        assert_eq!(session.surface().text(), "About\n");
        assert!(session.is_open());
    }

    #[test]
    fn test_show_switches_view() {
        let mut session = Session::new(TextPane::new());
        session.open_project(&project());
        session.show(ViewKind::SceneContents);

        assert_eq!(session.surface().text(), "C\nbody\n");
        assert_eq!(session.surface().tag_at(0), StyleTag::Heading2);
    }

    #[test]
    fn test_close_clears_everything() {
        let mut session = Session::new(TextPane::new());
        session.open_project(&project());
        session.close();

        assert!(!session.is_open());
        assert_eq!(session.status(), "");
        assert!(session.surface().is_empty());

        session.show(ViewKind::ChapterTitles);
        assert!(session.surface().is_empty());
    }

    #[test]
    fn test_failed_open_keeps_current_project() {
        let mut session = Session::new(TextPane::new());
        session.open_project(&project());

        assert!(session.open("missing.docx").is_err());
        assert!(session.is_open());
        assert_eq!(session.bundle().map(|b| b.title.as_str()), Some("Demo"));
    }
}
