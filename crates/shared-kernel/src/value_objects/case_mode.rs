// crates/shared-kernel/src/value_objects/case_mode.rs
use serde::{Deserialize, Serialize};

use super::CharKey;

/// 大文字小文字の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    /// Letters are folded to uppercase; diacritic keys carry no case tag.
    #[default]
    Insensitive,
    /// Letters keep their case; diacritic keys are tagged `CAP` / `SMALL`.
    Sensitive,
}

impl CaseMode {
    #[inline]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }

    /// Key for a letter-like character under this mode.
    pub fn fold(self, c: char) -> CharKey {
        match self {
            Self::Sensitive => CharKey::from_char(c),
            Self::Insensitive => CharKey::upper(c),
        }
    }
}

impl From<bool> for CaseMode {
    #[inline]
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive { Self::Sensitive } else { Self::Insensitive }
    }
}
