//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the injected ports:
//!
//! - [`api`]: the three entry points a UI calls (`analyze_text`,
//!   `parse_discount`, `sort_characters`)
//! - [`orchestrator`]: the full pipeline from text sources to a report
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod dto;
pub mod orchestrator;

pub use api::{analyze_text, parse_discount, sort_characters};
pub use dto::{AnalysisReport, AnalysisRequest, ReportEntry, ReportOptions};
pub use orchestrator::RunAnalysis;
