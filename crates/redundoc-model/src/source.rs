use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::comment::DocComment;

/// A source file and the doc comments found in it, in text order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    #[serde(skip)]
    pub text: String,
    /// Doc comments in text order.
    pub comments: Vec<DocComment>,
}

impl SourceFile {
    /// Creates a file with no comments parsed yet.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            comments: Vec::new(),
        }
    }
}
