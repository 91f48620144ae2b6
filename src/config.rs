/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportContext from CLI arguments and the environment
/// - Resolving the tri-state "show labels" flag from that context
/// - Folding everything into immutable RenderOptions
use crate::cli::CliArgs;
use crate::error::ReportError;
use crate::types::{LabelMode, OutputFormat};
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Context key holding the "show labels" flag
pub const SHOW_LABELS_KEY: &str = "show-labels";

/// Environment variable consulted when --labels is not given
pub const SHOW_LABELS_ENV: &str = "DEPRECATION_REPORT_SHOW_LABELS";

/// Key-value context the report flags are resolved from
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    values: HashMap<String, Value>,
}

impl ReportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Resolve the "show labels" flag: unset, or an explicit bool.
    /// Any other stored type is a context error.
    pub fn show_labels(&self) -> Result<LabelMode, ReportError> {
        match self.get(SHOW_LABELS_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(ReportError::Context {
                key: SHOW_LABELS_KEY.to_string(),
                message: format!("expected a boolean, found {}", other),
            }),
        }
    }
}

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub input: String,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub label_mode: LabelMode,
    pub rule_sets: Vec<String>,
}

/// Build RenderOptions from CLI arguments and the process environment
pub fn build_render_options(args: &CliArgs) -> Result<RenderOptions, ReportError> {
    build_render_options_with_env(args, env::var(SHOW_LABELS_ENV).ok())
}

/// Build RenderOptions with an explicit value for the labels environment variable
pub fn build_render_options_with_env(
    args: &CliArgs,
    env_labels: Option<String>,
) -> Result<RenderOptions, ReportError> {
    debug!("Building render options from CLI args");

    let context = build_context(args, env_labels);
    let label_mode = context.show_labels()?;

    debug!("Resolved label mode {:?}", label_mode);

    Ok(RenderOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        format: args.format,
        label_mode,
        rule_sets: args.rule_sets.clone(),
    })
}

/// Seed a ReportContext; the CLI flag wins over the environment
pub fn build_context(args: &CliArgs, env_labels: Option<String>) -> ReportContext {
    let mut context = ReportContext::new();

    if let Some(labels) = args.labels {
        debug!("Using --labels={}", labels);
        context.set(SHOW_LABELS_KEY, Value::Bool(labels));
    } else if let Some(raw) = env_labels {
        debug!("Using {}={:?}", SHOW_LABELS_ENV, raw);
        context.set(SHOW_LABELS_KEY, parse_env_flag(&raw));
    }

    context
}

/// Interpret an environment flag; unrecognised text stays a string
fn parse_env_flag(raw: &str) -> Value {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Value::Bool(true),
        "false" | "0" | "no" => Value::Bool(false),
        "" => Value::Null,
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
