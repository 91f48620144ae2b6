//! Grouped text report.
//!
//! Findings are printed in RuleSet groups. Each group opens with a banner
//! (a `_` rule, `>>> RuleSet <<<`, a `-` rule) followed by a header row, and
//! all rows go through a `TabWriter` so columns line up across the group.

use super::Printer;
use crate::console_format::{TabWriter, rule_line};
use crate::error::ReportError;
use crate::ordering;
use crate::types::{Finding, LabelMode};
use log::{debug, info};
use std::io::Write;

/// Width of the separator rules around a group banner
pub const RULE_WIDTH: usize = 90;

const HEADER_WITH_LABELS: &str = "KIND\tNAMESPACE\tNAME\tAPI_VERSION\tREPLACE_WITH \t(SINCE) \tLABELS";
const HEADER_WITHOUT_LABELS: &str = "KIND\tNAMESPACE\tNAME\tAPI_VERSION\tREPLACE_WITH \t(SINCE)";

/// Column layout used for every header and row of one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnShape {
    WithLabels,
    WithoutLabels,
}

impl ColumnShape {
    fn from_label_mode(label_mode: LabelMode) -> Self {
        if label_mode == Some(true) { ColumnShape::WithLabels } else { ColumnShape::WithoutLabels }
    }

    fn header(self) -> &'static str {
        match self {
            ColumnShape::WithLabels => HEADER_WITH_LABELS,
            ColumnShape::WithoutLabels => HEADER_WITHOUT_LABELS,
        }
    }

    fn row(self, f: &Finding) -> String {
        let base = format!(
            "{}\t{}\t{}\t{}\t{} \t({}) ",
            f.kind, f.namespace, f.name, f.api_version, f.replace_with, f.since
        );
        match self {
            ColumnShape::WithLabels => format!("{}\t{}", base, f.labels_string()),
            ColumnShape::WithoutLabels => base,
        }
    }
}

/// Group tracking. An empty RuleSet is a real group, so "no group yet" is
/// its own state rather than an empty key.
enum GroupState<'a> {
    NoGroupYet,
    InGroup(&'a str),
}

impl GroupState<'_> {
    fn is_boundary(&self, rule_set: &str) -> bool {
        match self {
            GroupState::NoGroupYet => true,
            GroupState::InGroup(current) => *current != rule_set,
        }
    }
}

/// Render already-ordered findings to `sink`.
///
/// The LABELS column is shown only when `label_mode` is `Some(true)`.
/// Output is aligned and written in a single flush at the end; a sink
/// failure aborts the render and may leave partial output behind.
pub fn render<W: Write>(ordered: &[Finding], sink: &mut W, label_mode: LabelMode) -> Result<(), ReportError> {
    let shape = ColumnShape::from_label_mode(label_mode);
    debug!("Rendering {} findings using {:?} columns", ordered.len(), shape);

    let mut tw = TabWriter::with_report_layout(sink);
    let mut state = GroupState::NoGroupYet;

    for finding in ordered {
        if state.is_boundary(&finding.rule_set) {
            debug!("Starting group {:?}", finding.rule_set);
            write_banner(&mut tw, &finding.rule_set)?;
            writeln!(tw, "{}", shape.header())?;
            state = GroupState::InGroup(&finding.rule_set);
        }
        writeln!(tw, "{}", shape.row(finding))?;
    }

    tw.flush()?;
    Ok(())
}

/// Write the three banner lines that open a group
fn write_banner<W: Write>(w: &mut W, rule_set: &str) -> std::io::Result<()> {
    writeln!(w, "{}", rule_line('_', RULE_WIDTH))?;
    writeln!(w, ">>> {} <<<", rule_set)?;
    writeln!(w, "{}", rule_line('-', RULE_WIDTH))
}

/// Text printer owning its output sink
pub struct TextPrinter<W: Write> {
    sink: W,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> Printer for TextPrinter<W> {
    fn print(&mut self, findings: Vec<Finding>, label_mode: LabelMode) -> Result<(), ReportError> {
        let ordered = ordering::order(findings);
        render(&ordered, &mut self.sink, label_mode)?;
        info!("Printed {} findings", ordered.len());
        Ok(())
    }

    fn close(mut self: Box<Self>) -> Result<(), ReportError> {
        self.sink.flush()?;
        Ok(())
    }
}
