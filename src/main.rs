/*!
 * memsim - Run Driver
 *
 * External consumer of the engine: reads one JSON run description from a
 * file argument or stdin, executes it, and prints the report as JSON.
 * Replay pacing, tables, and styling are left to whatever reads the
 * output.
 */

use log::{error, info};
use memsim::{run, RunInput};
use std::io::Read;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let text = match read_input() {
        Ok(text) => text,
        Err(err) => {
            error!("could not read run description: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let input: RunInput = match serde_json::from_str(&text) {
        Ok(input) => input,
        Err(err) => {
            error!("invalid run description: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = match run(&input) {
        Ok(report) => report,
        Err(err) => {
            error!("run rejected: {}", err);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "{} trace events, {} layout rows",
        report.trace.len(),
        report.layout.len()
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("could not serialize report: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn read_input() -> std::io::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
