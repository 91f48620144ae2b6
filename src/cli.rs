use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "deprecation-report")]
#[command(about = "Render deprecated API findings as a grouped, column-aligned report")]
#[command(version)]
pub struct CliArgs {
    /// Findings to render: a JSON array, or an object with a "results" array ("-" reads stdin)
    #[arg(long, short = 'i', value_name = "PATH", default_value = "-")]
    pub input: String,

    /// Where to write the report ("-" writes to stdout)
    #[arg(long, short = 'o', value_name = "PATH", default_value = "-")]
    pub output: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show the LABELS column (bare flag means true)
    /// Falls back to DEPRECATION_REPORT_SHOW_LABELS when not given
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub labels: Option<bool>,

    /// Only report findings from these rule sets
    /// Can specify multiple: --rule-set "Deprecated APIs removed in 1.22" --rule-set "..."
    #[arg(long = "rule-set", value_name = "NAME")]
    pub rule_sets: Vec<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("--output must not be empty (use \"-\" for stdout)".to_string());
        }

        if self.input.is_empty() {
            return Err("--input must not be empty (use \"-\" for stdin)".to_string());
        }

        if self.rule_sets.iter().any(|r| r.trim().is_empty()) {
            return Err("--rule-set values must not be empty".to_string());
        }

        Ok(())
    }

    /// Is the report going to stdout?
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}
