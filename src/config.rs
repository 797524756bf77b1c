// src/config.rs
use slide_access_domain::{RuleCategory, Slide, VisitorProfile};
use slide_access_usecase::CheckAccessInput;

use crate::args::Args;
use crate::options::{DiagnosticsMode, OutputFormat};

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub slides: Vec<Slide>,
    pub visitors: Vec<VisitorProfile>,
    pub format: OutputFormat,
    pub diagnostics: DiagnosticsMode,
    pub fail_on_deny: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn input(&self) -> CheckAccessInput {
        CheckAccessInput { slides: self.slides.clone(), visitors: self.visitors.clone() }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let mut slides: Vec<Slide> = args.slides.into_iter().map(|s| s.0).collect();
        if slides.is_empty() {
            slides = default_slides();
        }

        Self {
            slides,
            visitors: args.visitors.into_iter().map(|v| v.0).collect(),
            format: args.format,
            diagnostics: args.diagnostics,
            fail_on_deny: args.fail_on_deny,
            verbosity: args.verbose,
        }
    }
}

/// One slide per category, named after it.
fn default_slides() -> Vec<Slide> {
    RuleCategory::ALL.iter().map(|&c| Slide::new(c.as_str(), c)).collect()
}
