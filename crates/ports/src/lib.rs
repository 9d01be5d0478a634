//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`collation`]: locale-aware string comparison used by the sorter
//! - [`text_source`]: loading the text to analyze (inline, file, stdin)
//! - [`report_sink`]: delivering a rendered report
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod collation;
pub mod report_sink;
pub mod text_source;
