// crates/domain/src/analytics/filter.rs
use std::{fmt, str::FromStr};

use cetnik_shared_kernel::{CharKey, Count, DomainError};
use serde::{Deserialize, Serialize};

use crate::model::{AnalysisResult, Category, FrequencyTable};

/// 表示対象カテゴリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Letters,
    Diacritics,
    Numbers,
    Symbols,
}

impl CategoryFilter {
    pub const fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Letters => Some(Category::Letters),
            Self::Diacritics => Some(Category::Diacritics),
            Self::Numbers => Some(Category::Numbers),
            Self::Symbols => Some(Category::Symbols),
        }
    }

    /// Entries visible under this filter, in table insertion order.
    ///
    /// `All` concatenates letters, diacritics, numbers and symbols. A key
    /// present in several tables keeps its first position and takes the
    /// count of the last table holding it.
    pub fn entries(self, result: &AnalysisResult) -> Vec<(CharKey, Count)> {
        match self.category() {
            Some(category) => result.table(category).entries(),
            None => {
                let mut combined = FrequencyTable::new();
                for (_, table) in result.tables() {
                    for (key, count) in table.iter() {
                        combined.set(key.clone(), count);
                    }
                }
                combined.entries()
            }
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Letters => Self::Letters,
            Category::Diacritics => Self::Diacritics,
            Category::Numbers => Self::Numbers,
            Category::Symbols => Self::Symbols,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category() {
            Some(category) => f.write_str(category.as_str()),
            None => f.write_str("all"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "letters" => Ok(Self::Letters),
            "diacritics" => Ok(Self::Diacritics),
            "numbers" => Ok(Self::Numbers),
            "symbols" => Ok(Self::Symbols),
            other => Err(DomainError::UnknownCategory { value: other.to_string() }),
        }
    }
}
