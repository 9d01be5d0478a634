// crates/usecase/src/dto.rs
use cetnik_domain::{
    AnalysisResult, DiscountTable,
    analytics::{CategoryFilter, SortMode, Stats},
};
use cetnik_ports::text_source::TextOrigin;
use cetnik_shared_kernel::{CaseMode, CaseTag, CharKey, Count};
use serde::Serialize;

/// What to show and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportOptions {
    pub case_mode: CaseMode,
    pub category: CategoryFilter,
    pub sort_mode: SortMode,
    /// Keep only the first `top` entries after sorting.
    pub top: Option<usize>,
    /// Drop entries a discount brought down to exactly zero.
    pub hide_zero: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub text: TextOrigin,
    pub discount: Option<TextOrigin>,
    pub options: ReportOptions,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub key: CharKey,
    pub glyph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseTag>,
    /// Count after the discount.
    pub count: Count,
    /// Count before the discount.
    pub original: Count,
    /// Amount subtracted, when the discount mentions the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted: Option<Count>,
}

impl ReportEntry {
    /// Czech case label (`velké` / `malé`) of a case-tagged diacritic.
    pub fn case_label(&self) -> Option<&'static str> {
        self.case.map(CaseTag::label)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub options: ReportOptions,
    /// Non-whitespace code points of the analyzed text.
    pub input_length: usize,
    pub stats: Stats,
    pub entries: Vec<ReportEntry>,
    #[serde(skip)]
    pub original: AnalysisResult,
    #[serde(skip)]
    pub discount: Option<DiscountTable>,
    #[serde(skip)]
    pub result: AnalysisResult,
}

impl AnalysisReport {
    pub fn has_discount(&self) -> bool {
        self.discount.as_ref().is_some_and(|d| !d.is_empty())
    }
}
