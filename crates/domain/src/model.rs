pub mod analysis_result;
pub mod category;
pub mod frequency_table;

pub use analysis_result::AnalysisResult;
pub use category::Category;
pub use frequency_table::FrequencyTable;

/// Flat table of characters and diacritics to subtract.
pub type DiscountTable = FrequencyTable;
