/// Loading findings produced by the rule engine
///
/// Accepts either a bare JSON array of findings or an object wrapping
/// them in a "results" array, from a file or stdin.
use crate::error::ReportError;
use crate::types::Finding;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

#[derive(Deserialize)]
#[serde(untagged)]
enum FindingsDocument {
    List(Vec<Finding>),
    Wrapped { results: Vec<Finding> },
}

/// Read findings from `path` ("-" reads stdin)
pub fn load_findings(path: &str) -> Result<Vec<Finding>, ReportError> {
    let raw = if path == "-" {
        debug!("Reading findings from stdin");
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).map_err(|e| input_error(path, e))?;
        s
    } else {
        debug!("Reading findings from {}", path);
        fs::read_to_string(path).map_err(|e| input_error(path, e))?
    };

    let findings = parse_findings(&raw).map_err(|e| input_error(path, e))?;
    debug!("Loaded {} findings", findings.len());
    Ok(findings)
}

/// Parse a findings document
pub fn parse_findings(raw: &str) -> Result<Vec<Finding>, serde_json::Error> {
    match serde_json::from_str(raw)? {
        FindingsDocument::List(findings) => Ok(findings),
        FindingsDocument::Wrapped { results } => Ok(results),
    }
}

/// Keep only findings whose RuleSet is listed; an empty list keeps everything
pub fn filter_rule_sets(findings: Vec<Finding>, rule_sets: &[String]) -> Vec<Finding> {
    if rule_sets.is_empty() {
        return findings;
    }

    let before = findings.len();
    let kept: Vec<Finding> = findings.into_iter().filter(|f| rule_sets.contains(&f.rule_set)).collect();
    debug!("Rule set filter kept {} of {} findings", kept.len(), before);
    kept
}

fn input_error(path: &str, e: impl std::fmt::Display) -> ReportError {
    ReportError::Input { path: path.to_string(), message: e.to_string() }
}
