//! Line-oriented order session.
//!
//! Reads one JSON order per line and writes one drink maker instruction per
//! accepted order. Lines that are blank are ignored; lines that do not parse
//! into a valid [`OrderRequest`] are logged and skipped without ending the
//! session.

use crate::orchestrator::{DispenserEnvironment, handle_order};
use crate::types::OrderRequest;
use anyhow::Context;
use std::io::{BufRead, Write};

/// What a finished session did
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Instructions written, one per accepted order
    pub instructions: usize,
    /// Non-blank lines that were not a valid order
    pub skipped: usize,
}

/// Process every order on `input` and write the instructions to `output`.
///
/// Returns once `input` is exhausted, after flushing `output`.
///
/// # Errors
///
/// Fails when `input` cannot be read or `output` cannot be written. A
/// malformed order is not an error.
#[tracing::instrument(skip_all, name = "order_session")]
pub fn run<R, W>(
    env: &DispenserEnvironment,
    input: R,
    mut output: W,
) -> anyhow::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read order")?;
        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<OrderRequest>(&line) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!(line = index + 1, %error, "Skipping malformed order");
                summary.skipped += 1;
                continue;
            },
        };

        let instruction = handle_order(env, &request);
        writeln!(output, "{instruction}").context("Failed to write instruction")?;
        summary.instructions += 1;
    }
    output.flush().context("Failed to flush instructions")?;

    tracing::debug!(
        instructions = summary.instructions,
        skipped = summary.skipped,
        "Input exhausted"
    );
    Ok(summary)
}
