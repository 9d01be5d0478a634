//! Analysis pipeline: text -> tables, discount text -> table, merge.

pub mod analyzer;
pub mod decompose;
pub mod discount;
pub mod merge;

pub use analyzer::analyze_text;
pub use discount::parse_discount;
pub use merge::{classify_key, merge_discount};
