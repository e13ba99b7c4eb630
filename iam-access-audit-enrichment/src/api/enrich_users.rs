use std::path::Path;

use anyhow::{Context, Result};
use aws_sdk_iam::Client as IamClient;
use aws_sdk_sts::Client as StsClient;
use log::{debug, info, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

use crate::api::model::{EnrichUsersConfig, EnrichUsersSummary};
use crate::aws::iam::AwsIamClient;
use crate::aws::sts::caller_account_id;
use crate::csv::{self, Header, USER_COLUMN};
use crate::enrichment::{collect_user_access, PolicySource, ROLE_NAMES_PLACEHOLDER};
use crate::errors::AuditError;

/// Enrich every user row of the input CSV with IAM policy and group names.
///
/// Streams the input line by line, appends the `policy_names`, `group_names`
/// and `role_names` columns, and writes the augmented rows to the output
/// path. Rows are processed strictly sequentially; the first IAM or I/O
/// failure aborts the run.
pub async fn enrich_users(config: &EnrichUsersConfig) -> Result<EnrichUsersSummary> {
    // Load AWS configuration using the standard credential provider chain.
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let iam = AwsIamClient::new(IamClient::new(&sdk_config));

    // Informational only; real credential problems surface on the first
    // IAM lookup.
    match caller_account_id(&StsClient::new(&sdk_config)).await {
        Ok(account_id) => info!("Reading IAM data from account {}", account_id),
        Err(e) => warn!("Could not resolve caller identity: {}", e),
    }

    let summary = run_enrichment(&iam, config)
        .await
        .context("Failed to enrich user inventory")?;
    Ok(summary)
}

/// Pipeline core, generic over the IAM lookup source.
pub(crate) async fn run_enrichment<S: PolicySource>(
    source: &S,
    config: &EnrichUsersConfig,
) -> crate::errors::Result<EnrichUsersSummary> {
    let input = File::open(&config.input_path)
        .await
        .map_err(|e| AuditError::file_system("open", &config.input_path, e))?;
    let mut lines = BufReader::new(input).lines();

    // Schema problems must surface before the output file exists.
    let header_line = lines
        .next_line()
        .await
        .map_err(|e| AuditError::file_system("read", &config.input_path, e))?
        .ok_or_else(|| AuditError::schema("input file has no header row", &config.input_path))?;
    let header = Header::parse(&header_line);
    let user_index = header.column_index(USER_COLUMN).ok_or_else(|| {
        AuditError::schema(
            format!("header row has no '{}' column", USER_COLUMN),
            &config.input_path,
        )
    })?;

    let output = File::create(&config.output_path)
        .await
        .map_err(|e| AuditError::file_system("create", &config.output_path, e))?;
    let mut writer = BufWriter::new(output);
    write_line(&mut writer, &header.augmented_line(), &config.output_path).await?;

    let mut summary = EnrichUsersSummary::default();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AuditError::file_system("read", &config.input_path, e))?
    {
        let mut fields = csv::split_fields(&line);
        // A short row reads as an empty user field and is skipped below.
        let user_name = fields.get(user_index).map(String::as_str).unwrap_or("");

        if user_name.is_empty() {
            debug!("Skipping row with empty user field");
            summary.rows_skipped += 1;
            continue;
        }
        if config.ignored_users.contains(user_name) {
            debug!("Skipping ignored user '{}'", user_name);
            summary.rows_skipped += 1;
            continue;
        }

        let access = collect_user_access(source, user_name).await?;
        fields.push(access.joined_policy_names());
        fields.push(access.joined_group_names());
        fields.push(ROLE_NAMES_PLACEHOLDER.to_string());
        write_line(&mut writer, &csv::join_fields(&fields), &config.output_path).await?;
        summary.users_enriched += 1;
    }

    writer
        .flush()
        .await
        .map_err(|e| AuditError::file_system("flush", &config.output_path, e))?;

    info!(
        "Enriched {} users ({} rows skipped)",
        summary.users_enriched, summary.rows_skipped
    );
    Ok(summary)
}

async fn write_line<W: AsyncWrite + Unpin>(
    writer: &mut W,
    line: &str,
    path: &Path,
) -> crate::errors::Result<()> {
    writer
        .write_all(line.as_bytes())
        .await
        .map_err(|e| AuditError::file_system("write", path, e))?;
    writer
        .write_all(b"\n")
        .await
        .map_err(|e| AuditError::file_system("write", path, e))
}
