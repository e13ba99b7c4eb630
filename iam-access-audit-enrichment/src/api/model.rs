//! Configuration and result types for the enrichment API.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::Serialize;

/// User name that AWS credential reports use for the account root.
///
/// Root is not an IAM user; the list calls would fail for it, so inventory
/// rows carrying this sentinel are skipped by default.
pub const ROOT_ACCOUNT_SENTINEL: &str = "<root_account>";

/// Configuration for one enrichment run.
#[derive(Debug, Clone)]
pub struct EnrichUsersConfig {
    /// Input CSV with a `user` column, one IAM user per data row.
    pub input_path: PathBuf,
    /// Destination for the augmented CSV.
    pub output_path: PathBuf,
    /// User names skipped without IAM lookups.
    pub ignored_users: HashSet<String>,
}

impl EnrichUsersConfig {
    /// Config with the default ignore set (the root account sentinel).
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ignored_users: HashSet::from([ROOT_ACCOUNT_SENTINEL.to_string()]),
        }
    }
}

/// Row counts from a completed enrichment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrichUsersSummary {
    /// Data rows that went through the IAM lookups and were written out.
    pub users_enriched: usize,
    /// Data rows skipped for an empty or ignored user field.
    pub rows_skipped: usize,
}
