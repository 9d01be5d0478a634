pub mod display;
pub mod filter;
pub mod sort;
pub mod stats;

pub use display::CharDisplay;
pub use filter::CategoryFilter;
pub use sort::{SortMode, TypeTier, sort_entries};
pub use stats::Stats;
