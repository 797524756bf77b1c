// src/args.rs
use clap::{ArgAction, Parser};

use crate::options::{DiagnosticsMode, OutputFormat};
use crate::parsers::{SlideArg, VisitorArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "slide_access",
    version = crate::VERSION,
    about = "Checks which visitors may ride which slides",
    long_about = "Checks visitors against the age, weight and height limits of each slide.\n\
                  Children slides: age 4-14, weight 20-50, height 80-120.\n\
                  Adult slides: age 14-60, weight 50-120, height 120-220."
)]
pub struct Args {
    /// Slide as NAME=CATEGORY (children|adult). Repeatable. Defaults to one slide per category.
    #[arg(long = "slide", value_name = "NAME=CATEGORY", help_heading = "Input")]
    pub slides: Vec<SlideArg>,

    /// Visitor as name=..,age=..,weight=..,height=.. Repeatable.
    #[arg(
        long = "visitor",
        required = true,
        value_name = "name=N,age=A,weight=W,height=H",
        help_heading = "Input"
    )]
    pub visitors: Vec<VisitorArg>,

    /// Report format
    #[arg(long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Where denial messages go
    #[arg(long, value_enum, default_value = "console", help_heading = "Output")]
    pub diagnostics: DiagnosticsMode,

    /// Exit with status 1 if any visitor was denied
    #[arg(long, help_heading = "Behavior")]
    pub fail_on_deny: bool,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
