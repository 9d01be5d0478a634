// crates/shared-kernel/src/value_objects/char_key.rs
use std::{borrow::Borrow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Separator between a diacritic and its case tag in a composite key.
pub const COMPOSITE_SEPARATOR: char = '_';

/// Case of the base letter a diacritic was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseTag {
    Cap,
    Small,
}

impl CaseTag {
    #[inline]
    pub const fn from_upper(is_upper: bool) -> Self {
        if is_upper { Self::Cap } else { Self::Small }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cap => "CAP",
            Self::Small => "SMALL",
        }
    }

    /// Czech label shown next to a case-tagged diacritic.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cap => "velké",
            Self::Small => "malé",
        }
    }
}

impl fmt::Display for CaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAP" => Ok(Self::Cap),
            "SMALL" => Ok(Self::Small),
            other => Err(DomainError::UnknownCaseTag { value: other.to_string() }),
        }
    }
}

/// Identifier of one histogram bucket.
///
/// Either a single (possibly case-folded) character, a bare combining mark,
/// or a composite `<mark>_<CAP|SMALL>` key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CharKey(String);

impl CharKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_char(c: char) -> Self {
        Self(c.to_string())
    }

    /// Uppercase form of `c`. May hold more than one code point (`ß` -> `SS`).
    pub fn upper(c: char) -> Self {
        Self(c.to_uppercase().collect())
    }

    pub fn composite(mark: char, tag: CaseTag) -> Self {
        Self(format!("{mark}{COMPOSITE_SEPARATOR}{tag}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Splits a composite key into its head and case tag.
    ///
    /// Keys that are not exactly `<non-empty head>_CAP` or
    /// `<non-empty head>_SMALL` come back whole with no tag, so a lone `_`
    /// symbol is not mistaken for a composite.
    pub fn split(&self) -> (&str, Option<CaseTag>) {
        match self.0.rsplit_once(COMPOSITE_SEPARATOR) {
            Some((head, tail)) if !head.is_empty() => match tail.parse::<CaseTag>() {
                Ok(tag) => (head, Some(tag)),
                Err(_) => (&self.0, None),
            },
            _ => (&self.0, None),
        }
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        self.split().1.is_some()
    }

    #[inline]
    pub fn head(&self) -> &str {
        self.split().0
    }

    #[inline]
    pub fn case_tag(&self) -> Option<CaseTag> {
        self.split().1
    }

    /// The key's only code point, if it has exactly one.
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for CharKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CharKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CharKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<char> for CharKey {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

impl From<&str> for CharKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CharKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for CharKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CharKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
