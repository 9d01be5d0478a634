// crates/ports/src/text_source.rs
use std::{fmt, path::PathBuf};

use cetnik_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Where a piece of text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum TextOrigin {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextOrigin {
    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl Default for TextOrigin {
    fn default() -> Self {
        Self::Inline(String::new())
    }
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => f.write_str("<inline>"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Port for loading text.
pub trait TextSource: Send + Sync {
    fn read(&self, origin: &TextOrigin) -> Result<String>;
}
