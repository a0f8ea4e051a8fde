//! # ywview
//!
//! A quick viewer for yWriter novel projects.
//!
//! ## Features
//!
//! - Read yWriter 7 (`.yw7`) project files
//! - Build six views of a project: project description, chapter titles,
//!   chapter descriptions, scene titles, scene descriptions, scene contents
//! - Count included chapters, scenes and words
//! - Render views as styled text fragments or as Markdown
//!
//! ## Quick Start
//!
//! ```no_run
//! use ywview::{ViewBuilder, ViewKind, read_project};
//! use ywview::display::render_markdown;
//!
//! let project = read_project("novel.yw7").unwrap();
//! let views = ViewBuilder::new().build(&project);
//!
//! println!("{}", views.summary);
//! print!("{}", render_markdown(views.get(ViewKind::SceneTitles)));
//! ```
//!
//! ## Building Projects in Code
//!
//! ```
//! use ywview::{Chapter, ChapterId, Project, Scene, SceneId, ViewBuilder};
//!
//! let mut project = Project::new().with_title("My Novel");
//! project.add_scene(SceneId(1), Scene::new("Opening").with_word_count(800));
//! project.add_chapter(ChapterId(1), Chapter::new("Chapter 1").with_scene(SceneId(1)));
//!
//! let views = ViewBuilder::new().build(&project);
//! assert_eq!(views.statistics.words, 800);
//! ```

pub mod display;
pub mod error;
pub mod filter;
pub mod fragment;
pub mod i18n;
pub mod markup;
pub mod model;
pub mod reader;
pub mod session;
pub(crate) mod util;
pub mod view;

pub use error::{Error, Result};
pub use filter::LegacyChapterRule;
pub use fragment::{StyleTag, TaggedFragment};
pub use markup::MarkupMode;
pub use model::{Chapter, ChapterId, Project, Scene, SceneId, SceneStatus};
pub use reader::{ProjectReader, Yw7Reader, parse_yw7, read_project};
pub use session::Session;
pub use view::{Statistics, ViewBuilder, ViewBundle, ViewConfig, ViewKind, ViewStore};
