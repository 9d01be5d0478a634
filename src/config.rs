// src/config.rs
use std::path::{Path, PathBuf};

use cetnik_domain::analytics::{CategoryFilter, SortMode};
use cetnik_ports::text_source::TextOrigin;
use cetnik_shared_kernel::{CaseMode, PresentationError};
use cetnik_usecase::{AnalysisRequest, ReportOptions};
use derive_builder::Builder;

use crate::{args::Args, options::OutputFormat};

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "TextOrigin::Stdin")]
    pub input: TextOrigin,
    #[builder(default)]
    pub discount: Option<TextOrigin>,

    #[builder(default)]
    pub case_mode: CaseMode,
    #[builder(default)]
    pub category: CategoryFilter,
    #[builder(default)]
    pub sort_mode: SortMode,
    #[builder(default)]
    pub top: Option<usize>,
    #[builder(default)]
    pub hide_zero: bool,

    #[builder(default = "OutputFormat::Table")]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: TextOrigin::Stdin,
            discount: None,
            case_mode: CaseMode::default(),
            category: CategoryFilter::default(),
            sort_mode: SortMode::default(),
            top: None,
            hide_zero: false,
            format: OutputFormat::Table,
            output_path: None,
        }
    }
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            case_mode: self.case_mode,
            category: self.category,
            sort_mode: self.sort_mode,
            top: self.top,
            hide_zero: self.hide_zero,
        }
    }

    pub fn request(&self) -> AnalysisRequest {
        AnalysisRequest {
            text: self.input.clone(),
            discount: self.discount.clone(),
            options: self.report_options(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let input = match (args.input.text, args.input.path) {
            (Some(text), _) => TextOrigin::Inline(text),
            (None, Some(path)) => file_or_stdin(path),
            (None, None) => TextOrigin::Stdin,
        };

        let discount = match (args.input.discount, args.input.discount_file) {
            (Some(text), _) => Some(TextOrigin::Inline(text)),
            (None, Some(path)) => Some(file_or_stdin(path)),
            (None, None) => None,
        };

        if input.is_stdin() && discount.as_ref().is_some_and(TextOrigin::is_stdin) {
            return Err(PresentationError::InvalidValue {
                flag: "--discount-file".to_string(),
                value: "-".to_string(),
                reason: "stdin already supplies the text to analyze".to_string(),
            });
        }

        ConfigBuilder::default()
            .input(input)
            .discount(discount)
            .case_mode(CaseMode::from(args.analysis.case_sensitive))
            .category(args.analysis.category)
            .sort_mode(args.analysis.sort)
            .top(args.analysis.top)
            .hide_zero(args.analysis.hide_zero)
            .format(args.output.format)
            .output_path(args.output.output)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

fn file_or_stdin(path: PathBuf) -> TextOrigin {
    if path == Path::new("-") { TextOrigin::Stdin } else { TextOrigin::File(path) }
}
