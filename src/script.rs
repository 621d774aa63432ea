//! Headless driver: input commands in, JSON-line events out.
//!
//! Each line is `row,col` or `restart`. Blank lines and lines starting
//! with `#` are skipped.

use crate::controller::Controller;
use crate::events::Input;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Counts from one script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptSummary {
    /// Commands handled (skipped lines excluded).
    pub commands: usize,
    /// Events written.
    pub events: usize,
}

/// Feeds every command in `input` through `controller`, writing each
/// emitted event to `output` as one JSON object per line.
///
/// # Errors
///
/// Fails on I/O errors and on the first line that is not a command.
#[instrument(skip_all)]
pub fn run_script<R: BufRead, W: Write>(
    controller: &mut Controller,
    input: R,
    mut output: W,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let command: Input = text
            .parse()
            .with_context(|| format!("Invalid command on line {}", line_no))?;
        debug!(line_no, ?command, "Handling command");
        summary.commands += 1;

        for event in controller.handle(command) {
            serde_json::to_writer(&mut output, &event).context("Failed to encode event")?;
            writeln!(output).context("Failed to write event")?;
            summary.events += 1;
        }
    }

    output.flush().context("Failed to flush output")?;
    info!(commands = summary.commands, events = summary.events, "Script finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let script = "# opening\n\n4,4\n   \n";
        let mut out = Vec::new();
        let summary = run_script(&mut Controller::new(), script.as_bytes(), &mut out).unwrap();

        assert_eq!(summary, ScriptSummary { commands: 1, events: 1 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"type\":\"placed\",\"row\":4,\"col\":4,\"symbol\":\"X\"}\n"
        );
    }

    #[test]
    fn test_bad_line_names_line_number() {
        let script = "1,1\nplease\n";
        let err = run_script(&mut Controller::new(), script.as_bytes(), Vec::new()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
