// crates/shared-kernel/src/value_objects/mod.rs
pub mod case_mode;
pub mod char_key;
pub mod counts;

pub use case_mode::CaseMode;
pub use char_key::{COMPOSITE_SEPARATOR, CaseTag, CharKey};
pub use counts::Count;
