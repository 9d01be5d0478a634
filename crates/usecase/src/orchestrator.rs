// crates/usecase/src/orchestrator.rs
use cetnik_domain::{
    AnalysisResult, DiscountTable, analyze_text,
    analytics::{CharDisplay, Stats, sort_entries},
    classify::is_whitespace,
    merge_discount, parse_discount,
};
use cetnik_ports::{
    collation::Collator,
    text_source::{TextOrigin, TextSource},
};
use cetnik_shared_kernel::{ErrorContext, Result};

use crate::dto::{AnalysisReport, AnalysisRequest, ReportEntry, ReportOptions};

pub struct RunAnalysis<'a> {
    source: &'a dyn TextSource,
    collator: &'a dyn Collator,
}

impl<'a> RunAnalysis<'a> {
    pub fn new(source: &'a dyn TextSource, collator: &'a dyn Collator) -> Self {
        Self { source, collator }
    }

    pub fn run(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let text = self.load(&request.text)?;
        let discount = request.discount.as_ref().map(|origin| self.load(origin)).transpose()?;
        Ok(self.report(&text, discount.as_deref(), request.options))
    }

    /// Build a report from already loaded text.
    pub fn report(&self, text: &str, discount_text: Option<&str>, options: ReportOptions) -> AnalysisReport {
        let case_mode = options.case_mode;
        let original = analyze_text(text, case_mode);
        let discount = discount_text.map(|d| parse_discount(d, case_mode));
        let result = match &discount {
            Some(table) => merge_discount(&original, table),
            None => original.clone(),
        };
        log::debug!(
            "analyzed {} bytes into {} keys ({} after discount)",
            text.len(),
            original.distinct_keys(),
            result.distinct_keys()
        );

        let entries = self.entries(&original, discount.as_ref(), &result, options);
        AnalysisReport {
            options,
            input_length: text.chars().filter(|c| !is_whitespace(*c)).count(),
            stats: Stats::of(&result),
            entries,
            original,
            discount,
            result,
        }
    }

    fn entries(
        &self,
        original: &AnalysisResult,
        discount: Option<&DiscountTable>,
        result: &AnalysisResult,
        options: ReportOptions,
    ) -> Vec<ReportEntry> {
        let mut visible = options.category.entries(result);
        if options.hide_zero {
            visible.retain(|(_, count)| !count.is_zero());
        }

        let case_mode = options.case_mode;
        let mut sorted = sort_entries(visible, options.sort_mode, |a, b| self.collator.compare(a, b, case_mode));
        if let Some(top) = options.top {
            sorted.truncate(top);
        }

        sorted
            .into_iter()
            .map(|(key, count)| {
                let display = CharDisplay::of(&key);
                let original = original.lookup(key.as_str()).unwrap_or_default();
                let discounted = discount.and_then(|d| d.get(key.as_str())).filter(|c| c.is_positive());
                ReportEntry { glyph: display.glyph, case: display.case, count, original, discounted, key }
            })
            .collect()
    }

    fn load(&self, origin: &TextOrigin) -> Result<String> {
        self.source.read(origin).with_context(|| format!("Failed to load text from {origin}"))
    }
}
