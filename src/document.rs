use crate::error::PatchError;
use crate::rule::PatchRule;
use std::fs;
use std::path::{Path, PathBuf};

/// Full contents of the target file while it is being patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    text: String,
    modified: bool,
}

impl SourceDocument {
    /// Build a document from text already in memory.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            modified: false,
        }
    }

    /// Read the whole file as UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatchError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PatchError::FileNotReadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, text))
    }

    /// Apply `rule` to the entire buffer and return how many spans it replaced.
    pub fn apply(&mut self, rule: &PatchRule) -> usize {
        let (patched, count) = rule.apply_counted(&self.text);
        if count == 0 {
            return 0;
        }

        let patched = patched.into_owned();
        if patched != self.text {
            self.modified = true;
        }
        self.text = patched;
        count
    }

    /// Overwrite the file the document was loaded from with the buffer.
    pub fn save(&self) -> Result<(), PatchError> {
        fs::write(&self.path, self.text.as_bytes()).map_err(|source| {
            PatchError::FileNotWritable {
                path: self.path.clone(),
                source,
            }
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether any applied rule changed the text.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
