/// Status and error output on stderr
///
/// stdout may be carrying the report, so nothing here writes to it.
/// Status lines are mirrored to the log so `RUST_LOG=debug` runs keep them
/// in order with the rest of the trace.
use log::debug;
use std::io::Write;

const STATUS_PREFIX: &str = "deprecation-report: ";

/// Write `s` to stderr in `fg`, bold; plain text when stderr is not a terminal
fn eprint_colored(s: &str, fg: term::color::Color) {
    let colored = term::stderr().is_some_and(|mut t| {
        let ok = t.fg(fg).is_ok() && {
            let _ = t.attr(term::Attr::Bold);
            write!(t, "{}", s).is_ok()
        };
        let _ = t.reset();
        ok
    });

    if !colored {
        eprint!("{}", s);
    }
}

/// Print a status line with the tool prefix
pub fn status(s: &str) {
    debug!("status: {}", s);
    eprint_colored(STATUS_PREFIX, term::color::CYAN);
    eprintln!("{}", s);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    debug!("error: {}", msg);
    eprintln!();
    eprint_colored("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
    eprintln!();
}
