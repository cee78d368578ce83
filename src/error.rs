//! Error types for project scaffolding.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Wrong command-line arguments. Carries the usage text to show.
    #[error("{0}")]
    Usage(String),

    /// A directory could not be created for a reason other than it already existing.
    #[error("failed to create directory {path}")]
    Filesystem {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
}
