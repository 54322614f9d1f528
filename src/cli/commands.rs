//! CLI command implementations
//!
//! Commands read stdin line by line and answer each line on stdout before
//! reading the next. A line that is not valid UTF-8 counts as malformed. Logs go to stderr. A malformed line is answered with
//! an error response and the run continues; a rejected value stops the run
//! only when `fail_fast` is configured.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::conv::{convert_str, Coerced, TypeTag};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::value::Value;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{conversion_response, error_response, parse_request, parse_value, write_line};

/// Counts for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that reached a converter
    pub processed: usize,
    /// Conversions that returned an error
    pub rejected: usize,
    /// Lines that could not be parsed
    pub malformed: usize,
}

/// Run a CLI command against stdin/stdout
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Convert { tag, table, config } => {
            let config = prepare(config.as_deref())?;
            let tag = TypeTag::parse(&tag);
            let table = config.table(table.as_deref()).to_string();
            let stdin = io::stdin();
            convert(&tag, &table, &config, stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        Command::Batch { config } => {
            let config = prepare(config.as_deref())?;
            let stdin = io::stdin();
            batch(&config, stdin.lock(), &mut io::stdout())?;
            Ok(())
        }
        Command::Tags => tags(&mut io::stdout()),
    }
}

fn prepare(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(path)?;
    Logger::set_min_severity(config.log_severity()?);
    Ok(config)
}

/// Converts every value line in `input` to `tag`.
pub fn convert<R: BufRead, W: Write>(
    tag: &TypeTag,
    table: &str,
    config: &Config,
    input: R,
    output: &mut W,
) -> CliResult<RunSummary> {
    run_lines(tag.as_str(), config, input, output, |line| {
        let value = parse_value(line)?;
        Ok((tag.to_string(), crate::conv::convert(tag, table, value)))
    })
}

/// Converts every request line in `input`.
pub fn batch<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: &mut W,
) -> CliResult<RunSummary> {
    run_lines("batch", config, input, output, |line| {
        let request = parse_request(line)?;
        let table = config.table(request.table.as_deref());
        let coerced = convert_str(&request.tag, table, Value::from(request.value));
        Ok((request.tag, coerced))
    })
}

/// Writes the recognized tags, one per line.
pub fn tags<W: Write>(output: &mut W) -> CliResult<()> {
    for tag in TypeTag::KNOWN.iter() {
        writeln!(output, "{}", tag)?;
    }
    output.flush()?;
    Ok(())
}

fn run_lines<R, W, F>(
    mode: &str,
    config: &Config,
    input: R,
    output: &mut W,
    mut handle: F,
) -> CliResult<RunSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> CliResult<(String, Coerced<Value>)>,
{
    log_event_with_fields(Event::BatchStart, &[("mode", mode)]);

    let mut summary = RunSummary::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let line_no = index + 1;
        let line_field = line_no.to_string();

        let decoded = String::from_utf8(raw)
            .map_err(|e| CliError::io_error(format!("line is not valid UTF-8: {}", e)));
        if matches!(&decoded, Ok(line) if line.trim().is_empty()) {
            continue;
        }

        let (tag, coerced) = match decoded.and_then(|line| handle(&line)) {
            Ok(handled) => handled,
            Err(err) => {
                summary.malformed += 1;
                log_event_with_fields(
                    Event::RequestMalformed,
                    &[("line", line_field.as_str()), ("message", err.message())],
                );
                write_line(output, &error_response(err.code_str(), err.message()))?;
                continue;
            }
        };

        summary.processed += 1;
        write_line(output, &conversion_response(&coerced))?;

        if let Some(err) = coerced.error() {
            summary.rejected += 1;
            let message = err.to_string();
            log_event_with_fields(
                Event::ConvertRejected,
                &[
                    ("code", err.code().code()),
                    ("line", line_field.as_str()),
                    ("message", message.as_str()),
                    ("tag", tag.as_str()),
                ],
            );

            if config.fail_fast {
                log_event_with_fields(Event::FailFastAbort, &[("line", line_field.as_str())]);
                return Err(CliError::conversion_failed(line_no, err));
            }
        }
    }

    let processed = summary.processed.to_string();
    let rejected = summary.rejected.to_string();
    let malformed = summary.malformed.to_string();
    log_event_with_fields(
        Event::BatchComplete,
        &[
            ("malformed", malformed.as_str()),
            ("mode", mode),
            ("processed", processed.as_str()),
            ("rejected", rejected.as_str()),
        ],
    );

    Ok(summary)
}
