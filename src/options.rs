use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Yaml,
}

impl OutputFormat {
    /// Formats meant to be piped into other tools.
    pub const fn is_machine_readable(self) -> bool {
        !matches!(self, Self::Table)
    }
}

/// Where denial messages go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    /// Print each message (stdout for tables, stderr otherwise)
    #[default]
    Console,
    /// Emit each message as a WARN log event
    Log,
    /// Discard messages
    Off,
}
