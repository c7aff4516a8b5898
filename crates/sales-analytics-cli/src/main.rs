mod cli;
mod dispatch;
mod logging;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use sales_analytics_core::AnalyticsError;
use stdout_io::write_stdout_text;
use tracing::debug;

const ROOT_HELP: &str = "sales-analytics - clean, analyze and report on pipe-delimited sales data

Usage:
  sales-analytics <command>

Start here:
  sales-analytics run                 Write the enriched data file and the sales report
  sales-analytics analyze --json      Print every analytic without writing files
  sales-analytics run --help          Input format, outputs and path rules
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let cli = match cli::Cli::try_parse() {
        Ok(value) => value,
        Err(err) => return Err(report_parse_error(&err, &raw_args)),
    };
    logging::init(cli.verbose);
    debug!(command = ?cli.command, "parsed command line");

    let mode = output::mode_for_command(&cli.command);
    match dispatch::dispatch(&cli) {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

/// Help and version requests exit 0; real parse failures exit 1 with the
/// standard error layout.
fn report_parse_error(err: &clap::Error, raw_args: &[String]) -> ExitCode {
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    ) {
        if write_stdout_text(&err.to_string()).is_err() {
            return ExitCode::from(2);
        }
        return ExitCode::SUCCESS;
    }

    let command_hint = command_from_args(raw_args);
    let clean_message = strip_clap_boilerplate(&err.to_string());
    let parse_error = AnalyticsError::invalid_argument_for_command(&clean_message, command_hint);
    let mode = infer_requested_output_mode(raw_args);
    if output::print_failure(&parse_error, mode).is_err() {
        return ExitCode::from(2);
    }
    ExitCode::from(1)
}

/// Strips clap's trailing boilerplate (Usage line, "For more information" hint)
/// so the "What to do next" section is the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

fn command_from_args(raw_args: &[String]) -> Option<&'static str> {
    raw_args
        .iter()
        .skip(1)
        .find(|value| !value.starts_with('-'))
        .and_then(|value| match value.as_str() {
            "run" => Some("run"),
            "analyze" => Some("analyze"),
            _ => None,
        })
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

fn exit_code_for_error(error: &AnalyticsError) -> ExitCode {
    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{command_from_args, infer_requested_output_mode, strip_clap_boilerplate};
    use crate::output::OutputMode;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn strips_usage_and_more_information_tail() {
        let message = "error: unexpected argument '--nope' found\n\nUsage: sales-analytics run\n\nFor more information, try '--help'.\n";
        assert_eq!(
            strip_clap_boilerplate(message),
            "error: unexpected argument '--nope' found"
        );
    }

    #[test]
    fn command_hint_skips_flags() {
        assert_eq!(
            command_from_args(&args(&["sales-analytics", "--verbose", "analyze", "--top", "x"])),
            Some("analyze")
        );
        assert_eq!(command_from_args(&args(&["sales-analytics", "report"])), None);
    }

    #[test]
    fn json_flag_selects_json_errors() {
        assert_eq!(
            infer_requested_output_mode(&args(&["sales-analytics", "run", "--json", "--bad"])),
            OutputMode::Json
        );
        assert_eq!(
            infer_requested_output_mode(&args(&["sales-analytics", "run"])),
            OutputMode::Text
        );
    }
}
