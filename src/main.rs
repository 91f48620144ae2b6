// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod console_format;
mod error;
mod input;
mod ordering;
mod report;
mod types;
mod ui;

use error::ReportError;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Resolve options, load findings and print the report
fn run(args: &cli::CliArgs) -> Result<(), ReportError> {
    // Resolve configuration before touching the sink so a bad flag writes nothing
    let options = config::build_render_options(args)?;

    let findings = input::load_findings(&options.input)?;
    let findings = input::filter_rule_sets(findings, &options.rule_sets);

    let sink = report::open_sink(&options.output)?;
    let mut printer = report::new_printer(options.format, sink);
    printer.print(findings, options.label_mode)?;
    printer.close()?;

    if !args.writes_to_stdout() {
        ui::status(&format!("report written to {}", options.output.display()));
    }

    Ok(())
}
