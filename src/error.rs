use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failures while patching the target file.
///
/// There is no rule-level variant: a pattern that matches nothing is a no-op.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("cannot read {path}: {source}")]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    FileNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot print completion message: {source}")]
    OutputFailed {
        #[source]
        source: std::io::Error,
    },
}

impl PatchError {
    /// Path of the file the failed operation touched, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PatchError::FileNotReadable { path, .. } | PatchError::FileNotWritable { path, .. } => {
                Some(path)
            }
            PatchError::OutputFailed { .. } => None,
        }
    }
}

/// Errors building a [`crate::PatchRule`].
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("invalid pattern for rule '{id}': {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}
