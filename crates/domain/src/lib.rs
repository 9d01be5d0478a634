//! # Domain
//!
//! Character classification and frequency analysis.
//!
//! - [`diacritics`]: combining mark <-> standalone glyph tables
//! - [`classify`]: letter / digit / whitespace / symbol decisions
//! - [`model`]: frequency tables and the four-way analysis result
//! - [`analysis`]: analyzer, discount parser and merger
//! - [`analytics`]: sorting, filtering, statistics and display forms
//!
//! Everything here is pure: no I/O, no shared state.

#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod analytics;
pub mod classify;
pub mod diacritics;
pub mod model;

pub use analysis::{analyze_text, merge_discount, parse_discount};
pub use model::{AnalysisResult, Category, DiscountTable, FrequencyTable};
