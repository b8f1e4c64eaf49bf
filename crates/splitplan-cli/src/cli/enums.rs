use clap::ValueEnum;

/// Output format for command results
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    #[value(name = "text")]
    Text,

    /// Pretty-printed JSON
    #[value(name = "json")]
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}
