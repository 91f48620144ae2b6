/// Console formatting module - Pure layout concerns
///
/// This module handles column alignment for the text report:
/// - Elastic tab stops (tab-terminated cells aligned per column block)
/// - Minimum cell width, padding and pad character
/// - Deferred output: nothing reaches the inner writer until `flush`
///
/// A column block is a run of consecutive lines that all have a
/// tab-terminated cell in that column. Each block gets its own width, so a
/// line without tabs (a banner, a separator) splits the table above it from
/// the table below it.
///
/// ## Output Flexibility
///
/// `TabWriter` implements `std::io::Write`, so the report can target
/// stdout, files, or in-memory buffers in tests.

use log::debug;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Minimal cell width, padding included
pub const MIN_WIDTH: usize = 10;

/// Padding added to the widest cell of each column
pub const PADDING: usize = 3;

/// Character used to pad cells
pub const PAD_CHAR: char = ' ';

/// Writer that aligns tab-separated cells into columns on flush
pub struct TabWriter<W: Write> {
    writer: W,
    min_width: usize,
    padding: usize,
    pad_char: char,
    buf: Vec<u8>,
}

impl<W: Write> TabWriter<W> {
    /// Create a new tab writer
    pub fn new(writer: W, min_width: usize, padding: usize, pad_char: char) -> Self {
        Self { writer, min_width, padding, pad_char, buf: Vec::new() }
    }

    /// Create a tab writer with the report layout (width 10, padding 3, spaces)
    pub fn with_report_layout(writer: W) -> Self {
        Self::new(writer, MIN_WIDTH, PADDING, PAD_CHAR)
    }

    /// Access the inner writer. Buffered text that was not flushed is dropped.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Lay out everything buffered so far
    fn format_buffer(&self) -> String {
        let text = String::from_utf8_lossy(&self.buf);
        let lines: Vec<Vec<&str>> = text.split('\n').map(|line| line.split('\t').collect()).collect();

        let mut out = String::with_capacity(text.len() * 2);
        let mut widths = Vec::new();
        self.format_block(&mut out, &mut widths, &lines, 0, lines.len());
        out
    }

    /// Recursively size the column at `widths.len()` for lines[line0..line1]
    fn format_block(
        &self,
        out: &mut String,
        widths: &mut Vec<usize>,
        lines: &[Vec<&str>],
        mut line0: usize,
        line1: usize,
    ) {
        let column = widths.len();
        let mut this = line0;

        while this < line1 {
            if !has_cell(&lines[this], column) {
                this += 1;
                continue;
            }

            // Block starts here; everything before it is already laid out
            self.write_lines(out, widths, lines, line0, this);
            line0 = this;

            let mut width = self.min_width;
            while this < line1 && has_cell(&lines[this], column) {
                width = width.max(display_width(lines[this][column]) + self.padding);
                this += 1;
            }

            widths.push(width);
            self.format_block(out, widths, lines, line0, this);
            widths.pop();
            line0 = this;
        }

        self.write_lines(out, widths, lines, line0, line1);
    }

    /// Write lines[from..to] using the current column widths
    fn write_lines(&self, out: &mut String, widths: &[usize], lines: &[Vec<&str>], from: usize, to: usize) {
        for i in from..to {
            for (j, cell) in lines[i].iter().enumerate() {
                out.push_str(cell);
                if let Some(&width) = widths.get(j) {
                    let fill = width.saturating_sub(display_width(cell));
                    out.extend(std::iter::repeat_n(self.pad_char, fill));
                }
            }
            // The final line is whatever followed the last newline
            if i + 1 < lines.len() {
                out.push('\n');
            }
        }
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let formatted = self.format_buffer();
            debug!("Flushing {} bytes of aligned output", formatted.len());
            self.buf.clear();
            self.writer.write_all(formatted.as_bytes())?;
        }
        self.writer.flush()
    }
}

/// Whether `line` has a tab-terminated cell at `column`
fn has_cell(line: &[&str], column: usize) -> bool {
    column + 1 < line.len()
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Repeat `c` to build a full-width rule line
pub fn rule_line(c: char, width: usize) -> String {
    std::iter::repeat_n(c, width).collect()
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
