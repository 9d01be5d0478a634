// crates/domain/src/analysis/decompose.rs
use cetnik_shared_kernel::{CaseMode, CaseTag, CharKey};
use unicode_normalization::char::decompose_canonical;

/// Canonical (NFD) decomposition of a single code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition {
    base: char,
    marks: Vec<char>,
}

impl Decomposition {
    pub fn of(c: char) -> Self {
        let mut parts = Vec::with_capacity(3);
        decompose_canonical(c, |d| parts.push(d));
        // decompose_canonical always emits at least the input itself
        let base = parts.first().copied().unwrap_or(c);
        let marks = parts.into_iter().skip(1).collect();
        Self { base, marks }
    }

    #[inline]
    pub fn base(&self) -> char {
        self.base
    }

    #[inline]
    pub fn marks(&self) -> &[char] {
        &self.marks
    }

    /// True when NFD produced more than one code point.
    #[inline]
    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }

    pub fn base_case(&self) -> CaseTag {
        CaseTag::from_upper(is_upper(self.base))
    }

    /// Diacritic keys for every trailing mark, tagged with the base's case
    /// when `case_mode` is sensitive.
    pub fn mark_keys(&self, case_mode: CaseMode) -> impl Iterator<Item = CharKey> + '_ {
        let tag = self.base_case();
        self.marks.iter().map(move |&mark| mark_key(mark, tag, case_mode))
    }
}

/// Key of one diacritic: bare mark, or `<mark>_<CAP|SMALL>` when case-sensitive.
fn mark_key(mark: char, tag: CaseTag, case_mode: CaseMode) -> CharKey {
    match case_mode {
        CaseMode::Sensitive => CharKey::composite(mark, tag),
        CaseMode::Insensitive => CharKey::from_char(mark),
    }
}

/// Has a case and equals its own uppercase form.
pub fn is_upper(c: char) -> bool {
    let single = std::iter::once(c);
    c.to_uppercase().eq(single.clone()) && !c.to_lowercase().eq(single)
}
