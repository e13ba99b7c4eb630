use anyhow::{Context, Result};
use iam_access_audit_enrichment::EnrichUsersSummary;
use log::debug;
use std::io::{self, Write};

pub(crate) fn note(msg: &str) {
    let _ = writeln!(io::stderr(), "iam-access-audit: {}", msg);
}

pub(crate) fn error(msg: &str) {
    let _ = writeln!(io::stderr(), "iam-access-audit (error): {}", msg);
}

/// Output the run summary as JSON to stdout
pub(crate) fn print_summary_json(summary: &EnrichUsersSummary, pretty: bool) -> Result<()> {
    debug!("Formatting run summary as JSON (pretty: {})", pretty);

    let json_output = if pretty {
        serde_json::to_string_pretty(summary)
    } else {
        serde_json::to_string(summary)
    }
    .context("Failed to serialize run summary to JSON")?;

    println!("{}", json_output);
    Ok(())
}
