use std::fs;

use cetnik_domain::{
    AnalysisResult, FrequencyTable,
    analytics::{CategoryFilter, SortMode},
    merge_discount,
};
use cetnik_infra::{CzechCollator, FsTextSource};
use cetnik_ports::text_source::TextOrigin;
use cetnik_shared_kernel::{CaseMode, CharKey, Count};
use cetnik_usecase::{AnalysisRequest, ReportOptions, RunAnalysis, analyze_text, parse_discount, sort_characters};

const SENTENCE: &str = "Příliš žluťoučký kůň úpěl ďábelské ódy";

fn keys(entries: &[(CharKey, Count)]) -> Vec<&str> {
    entries.iter().map(|(k, _)| k.as_str()).collect()
}

#[test]
fn empty_text_gives_empty_tables() {
    assert_eq!(analyze_text("", true), AnalysisResult::default());
    assert_eq!(analyze_text("", false), AnalysisResult::default());
}

#[test]
fn discount_of_absent_character() {
    let merged = merge_discount(&analyze_text("b", false), &parse_discount("a", false));
    assert_eq!(merged.letters, FrequencyTable::from_pairs([("B", 1), ("A", -1)]));
}

#[test]
fn self_discount_zeroes_every_key() {
    for case_sensitive in [false, true] {
        let original = analyze_text(SENTENCE, case_sensitive);
        let merged = merge_discount(&original, &parse_discount(SENTENCE, case_sensitive));
        for (_, table) in original.tables() {
            for key in table.keys() {
                assert_eq!(merged.lookup(key.as_str()), Some(Count::zero()), "{key:?}");
            }
        }
    }
}

#[test]
fn czech_alphabetical_order() {
    let result = analyze_text("hchcčdrřsšzž", false);
    let sorted = sort_characters(result.letters.entries(), SortMode::Alphabetical, false, &CzechCollator::new());
    assert_eq!(keys(&sorted), vec!["C", "D", "H", "R", "S", "Z"]);

    let result = analyze_text("Čč", true);
    let sorted = sort_characters(result.diacritics.entries(), SortMode::Alphabetical, true, &CzechCollator::new());
    assert_eq!(sorted.len(), 2);
    assert!(sorted.iter().all(|(_, c)| *c == 1));
}

#[test]
fn letters_sort_with_lowercase_first_when_case_sensitive() {
    let result = analyze_text("BbaA", true);
    let sorted = sort_characters(result.letters.entries(), SortMode::Alphabetical, true, &CzechCollator::new());
    assert_eq!(keys(&sorted), vec!["a", "A", "b", "B"]);
}

#[test]
fn run_with_file_sources() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("text.txt");
    let discount = dir.path().join("sleva.txt");
    fs::write(&text, SENTENCE).unwrap();
    fs::write(&discount, "ůň").unwrap();

    let request = AnalysisRequest {
        text: TextOrigin::File(text),
        discount: Some(TextOrigin::File(discount)),
        options: ReportOptions {
            category: CategoryFilter::Diacritics,
            sort_mode: SortMode::Frequency,
            ..Default::default()
        },
    };
    let report = RunAnalysis::new(&FsTextSource::new(), &CzechCollator::new())
        .run(&request)
        .expect("run succeeds");

    let caron = report.entries.iter().find(|e| e.glyph == "ˇ").expect("caron listed");
    assert_eq!(caron.original, 8);
    assert_eq!(caron.count, 7);
    assert_eq!(caron.discounted, Some(Count::one()));
    let ring = report.entries.iter().find(|e| e.glyph == "°").expect("zero entries stay listed");
    assert_eq!(ring.count, Count::zero());
    assert_eq!(ring.discounted, Some(Count::one()));
    assert_eq!(report.input_length, 33);
}
