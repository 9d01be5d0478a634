// crates/domain/src/analytics/display.rs
use cetnik_shared_kernel::{CaseTag, CharKey};
use serde::Serialize;

use crate::diacritics;

/// How a key is shown to the user: the visible glyph and, for case-tagged
/// diacritics, which case of letter it sat on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharDisplay {
    pub glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseTag>,
}

impl CharDisplay {
    pub fn of(key: &CharKey) -> Self {
        let (head, case) = key.split();
        let mut chars = head.chars();
        let glyph = match (chars.next(), chars.next()) {
            (Some(c), None) => diacritics::display_glyph(c).map_or_else(|| head.to_string(), String::from),
            _ => head.to_string(),
        };
        Self { glyph, case }
    }

    /// Czech case label (`velké` / `malé`) for composite keys.
    pub fn label(&self) -> Option<&'static str> {
        self.case.map(CaseTag::label)
    }
}
