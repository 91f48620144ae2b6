//! JSON export of ordered findings.
//!
//! Machine-readable counterpart of the text report: the same ordering,
//! written as one pretty-printed array when the printer is closed. Labels
//! are always included, with keys in order.

use super::Printer;
use crate::error::ReportError;
use crate::ordering;
use crate::types::{Finding, LabelMode};
use log::{debug, info};
use std::io::Write;

/// JSON printer owning its output sink.
///
/// Findings from every `print` call are collected and written as a single
/// array on `close`, so the sink always holds one JSON document.
pub struct JsonPrinter<W: Write> {
    sink: W,
    pending: Vec<Finding>,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, pending: Vec::new() }
    }
}

impl<W: Write> Printer for JsonPrinter<W> {
    fn print(&mut self, findings: Vec<Finding>, label_mode: LabelMode) -> Result<(), ReportError> {
        if label_mode.is_some() {
            debug!("Label mode {:?} ignored for JSON output", label_mode);
        }

        debug!("Queued {} findings for JSON export", findings.len());
        self.pending.extend(findings);
        Ok(())
    }

    fn close(mut self: Box<Self>) -> Result<(), ReportError> {
        let ordered = ordering::order(std::mem::take(&mut self.pending));
        serde_json::to_writer_pretty(&mut self.sink, &ordered)?;
        writeln!(self.sink)?;
        self.sink.flush()?;

        info!("Exported {} findings as JSON", ordered.len());
        Ok(())
    }
}
