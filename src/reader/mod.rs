//! Project file readers.
//!
//! A [`ProjectReader`] turns file bytes into a [`Project`]. The view
//! pipeline depends only on the resulting value, never on the reader.
//!
//! ```no_run
//! use ywview::reader::read_project;
//!
//! let project = read_project("novel.yw7")?;
//! println!("{} chapters", project.chapter_order.len());
//! # Ok::<(), ywview::Error>(())
//! ```

mod yw7;

pub use yw7::{Yw7Reader, parse_yw7};

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::model::Project;

/// Supported project file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// yWriter 7 XML project (`.yw7`).
    Yw7,
}

impl Format {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("yw7") {
            Some(Format::Yw7)
        } else {
            None
        }
    }

    pub fn reader(self) -> Box<dyn ProjectReader> {
        match self {
            Format::Yw7 => Box::new(Yw7Reader::new()),
        }
    }
}

/// Parses a project file into the in-memory model.
pub trait ProjectReader {
    /// Parse a complete project file held in memory.
    fn read_bytes(&self, bytes: &[u8]) -> Result<Project>;

    /// Read and parse a project file from disk.
    fn read_path(&self, path: &Path) -> Result<Project> {
        let bytes = std::fs::read(path)?;
        self.read_bytes(&bytes)
    }
}

/// Read a project file, choosing the reader by file extension.
pub fn read_project(path: impl AsRef<Path>) -> Result<Project> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;
    let project = format.reader().read_path(path)?;
    info!(
        path = %path.display(),
        chapters = project.chapter_order.len(),
        scenes = project.scenes.len(),
        "read project"
    );
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/b.yw7")), Some(Format::Yw7));
        assert_eq!(Format::from_path(Path::new("B.YW7")), Some(Format::Yw7));
        assert_eq!(Format::from_path(Path::new("b.yw6")), None);
        assert_eq!(Format::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_read_project_rejects_unknown_extension() {
        let err = read_project("novel.docx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_read_project_missing_file() {
        let err = read_project("/nonexistent/dir/novel.yw7").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
