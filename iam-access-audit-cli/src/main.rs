//! Command-line entry point for the IAM access audit.

mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use iam_access_audit_enrichment::{enrich_users, EnrichUsersConfig};
use log::debug;

/// Enrich an IAM user inventory CSV with policy and group names.
///
/// Reads the input CSV (which must have a `user` header column), looks up
/// each user's inline policies, attached managed policies and group
/// memberships, and writes the rows back out with `policy_names`,
/// `group_names` and `role_names` columns appended.
#[derive(Parser, Debug)]
#[command(name = "iam-access-audit")]
#[command(version, about)]
struct Cli {
    /// Input CSV with a `user` column, one IAM user per data row.
    input: PathBuf,

    /// Destination path for the augmented CSV.
    output: PathBuf,

    /// User name to skip in addition to the root account sentinel.
    /// May be given multiple times.
    #[arg(long = "ignore-user", value_name = "USER")]
    ignore_users: Vec<String>,

    /// Print the run summary as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Pretty-print the JSON summary (implies --json).
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // Usage errors exit with status 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = run(cli).await {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = EnrichUsersConfig::new(cli.input, cli.output);
    config.ignored_users.extend(cli.ignore_users);
    debug!(
        "Enriching {} into {} ({} ignored users)",
        config.input_path.display(),
        config.output_path.display(),
        config.ignored_users.len()
    );

    let summary = enrich_users(&config).await?;

    if cli.json || cli.pretty {
        output::print_summary_json(&summary, cli.pretty)?;
    } else {
        output::note(&format!(
            "enriched {} users ({} rows skipped) -> {}",
            summary.users_enriched,
            summary.rows_skipped,
            config.output_path.display()
        ));
    }
    Ok(())
}
