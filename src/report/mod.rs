//! Report generation module - Printers for deprecation findings.
//!
//! This module handles:
//! - Ordering findings before they are printed
//! - The grouped, column-aligned text report
//! - JSON export of the same ordered findings
//! - Opening the output sink
//!
//! Column alignment is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `text` - Grouped text report with RuleSet banners
//! - `json` - Pretty-printed JSON export

mod json;
mod text;

pub use json::JsonPrinter;
pub use text::TextPrinter;

use crate::error::ReportError;
use crate::types::{Finding, LabelMode, OutputFormat};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A report printer owning its output sink.
///
/// Lifecycle: construct with a sink, call `print` one or more times, then
/// `close` to flush and release the sink. Dropping a printer without
/// closing it still releases the sink.
pub trait Printer {
    /// Order and print a batch of findings
    fn print(&mut self, findings: Vec<Finding>, label_mode: LabelMode) -> Result<(), ReportError>;

    /// Flush and release the output sink
    fn close(self: Box<Self>) -> Result<(), ReportError>;
}

/// Open the output sink: `-` is stdout, anything else is created or truncated
pub fn open_sink(path: &Path) -> Result<Box<dyn Write>, ReportError> {
    if path.as_os_str() == "-" {
        debug!("Writing report to stdout");
        return Ok(Box::new(io::stdout()));
    }

    debug!("Writing report to {:?}", path);
    let file = File::create(path).map_err(|source| ReportError::Open { path: path.to_path_buf(), source })?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Build the printer for `format` around an opened sink
pub fn new_printer<W: Write + 'static>(format: OutputFormat, sink: W) -> Box<dyn Printer> {
    match format {
        OutputFormat::Text => Box::new(TextPrinter::new(sink)),
        OutputFormat::Json => Box::new(JsonPrinter::new(sink)),
    }
}
