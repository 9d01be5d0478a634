// crates/domain/src/model/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The four disjoint partitions of counted characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Letters,
    Diacritics,
    Numbers,
    Symbols,
}

impl Category {
    /// Lookup order used when a key has to be credited to a single table.
    pub const ALL: [Self; 4] = [Self::Letters, Self::Diacritics, Self::Numbers, Self::Symbols];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::Diacritics => "diacritics",
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
        }
    }

    /// Czech heading used by the human-readable output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Letters => "Písmena",
            Self::Diacritics => "Diakritika",
            Self::Numbers => "Čísla",
            Self::Symbols => "Symboly",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
