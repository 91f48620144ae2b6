/// Deterministic ordering of findings
///
/// Findings are ordered by RuleSet, then Kind, then Namespace, then Name,
/// comparing bytes. The sort is stable, so findings equal on all four keys
/// keep their input order.
use crate::types::Finding;
use log::debug;
use std::cmp::Ordering;

/// Compare two findings on (RuleSet, Kind, Namespace, Name)
pub fn compare_findings(a: &Finding, b: &Finding) -> Ordering {
    a.rule_set
        .cmp(&b.rule_set)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.namespace.cmp(&b.namespace))
        .then_with(|| a.name.cmp(&b.name))
}

/// Order findings for rendering. Duplicates are preserved.
pub fn order(mut findings: Vec<Finding>) -> Vec<Finding> {
    debug!("Ordering {} findings", findings.len());
    findings.sort_by(compare_findings);
    findings
}
