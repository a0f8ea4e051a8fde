//! Error types for ywview operations.

use thiserror::Error;

/// Errors that can occur while reading a project file.
///
/// Building and displaying views never fail; only the reader side of the
/// pipeline produces these.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid project: {0}")]
    InvalidProject(String),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;
