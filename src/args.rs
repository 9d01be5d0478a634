// src/args.rs
use std::path::PathBuf;

use cetnik_domain::analytics::{CategoryFilter, SortMode};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};

use crate::{options::OutputFormat, parsers};

#[derive(Parser, Debug)]
#[command(
    name = "cetnik",
    version,
    about = "Četnost písmen, diakritiky, číslic a symbolů v textu",
    long_about = "Counts letters, diacritics, digits and symbols in a text. \
                  Composed characters are split into a base letter and their diacritics. \
                  A discount text can be subtracted from the counts."
)]
pub struct Args {
    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    /// ログ詳細度 (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(ClapArgs, Debug)]
pub struct InputOptions {
    /// Text file to analyze ("-" or nothing reads stdin)
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub path: Option<PathBuf>,

    /// Analyze this text instead of a file
    #[arg(short, long, conflicts_with = "path", help_heading = "Input")]
    pub text: Option<String>,

    /// Characters to subtract from the counts
    #[arg(short, long, help_heading = "Input")]
    pub discount: Option<String>,

    /// Read the discount characters from a file ("-" reads stdin)
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "discount", help_heading = "Input")]
    pub discount_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisOptions {
    /// Count upper and lower case separately
    #[arg(short = 'c', long, help_heading = "Analysis")]
    pub case_sensitive: bool,

    /// all, letters, diacritics, numbers or symbols
    #[arg(long, default_value = "all", help_heading = "Analysis")]
    pub category: CategoryFilter,

    /// alphabetical or frequency
    #[arg(short, long, default_value = "alphabetical", help_heading = "Analysis")]
    pub sort: SortMode,

    /// Show only the first N entries
    #[arg(long, value_parser = parsers::parse_positive_usize, help_heading = "Analysis")]
    pub top: Option<usize>,

    /// Hide entries a discount brought down to zero
    #[arg(long, help_heading = "Analysis")]
    pub hide_zero: bool,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(short, long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// 出力先ファイル
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,
}
